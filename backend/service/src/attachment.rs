use std::sync::Arc;

use diesel::{ExpressionMethods, QueryDsl, insert_into};
use pergola_backend_model::{
	attachment::{AttachmentRecord, AttachmentRef, SqlAttachmentKind},
	branch::BranchRef,
	db::schema::branch_attachment::dsl,
	object::ObjectRef,
};
use pergola_common_model::attachment::AttachmentKind;
use time::{OffsetDateTime, PrimitiveDateTime};
use tracing::info;

use crate::{Result, database::DatabaseService, storage::StorageService};

/// Attachment operations: file persistence plus the record that points
/// at the stored file.
#[derive(Debug)]
pub struct AttachmentService {
	db: Arc<DatabaseService>,
	storage: Arc<StorageService>,
}

/// Target of an attachment upload.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct NewAttachment {
	pub branch: BranchRef,
	pub object: Option<ObjectRef>,
	pub kind: AttachmentKind,
}

impl AttachmentService {
	pub fn new(db: Arc<DatabaseService>, storage: Arc<StorageService>) -> Self {
		Self { db, storage }
	}

	/// Persists one uploaded file and records it for the target branch.
	///
	/// The upload timestamp is assigned here, not taken from the client.
	pub async fn store(
		&self,
		target: NewAttachment,
		file_name: &str,
		data: &[u8],
	) -> Result<AttachmentRecord> {
		let file_path = self.storage.save(file_name, data).await?;

		let now = OffsetDateTime::now_utc();
		let now = PrimitiveDateTime::new(now.date(), now.time());
		let kind = SqlAttachmentKind::from(target.kind) as i16;

		let mut conn = self.db.get().await?;
		let id = conn
			.get_result::<_, AttachmentRef>(
				insert_into(dsl::branch_attachment)
					.values((
						dsl::branch.eq(target.branch),
						dsl::object.eq(target.object),
						dsl::kind.eq(kind),
						dsl::file_path.eq(&file_path),
						dsl::uploaded_at.eq(now),
					))
					.returning(dsl::id),
			)
			.await?;
		info!(attachment = id, branch = target.branch, path = %file_path, "stored attachment");

		Ok(AttachmentRecord {
			id,
			branch: target.branch,
			object: target.object,
			kind,
			file_path,
			uploaded_at: now,
		})
	}

	/// Lists all attachments of a branch. Unknown branches yield an
	/// empty list.
	pub async fn attachments_of_branch(
		&self,
		branch: BranchRef,
	) -> Result<Vec<AttachmentRecord>> {
		let mut conn = self.db.get().await?;
		Ok(conn
			.load_select(dsl::branch_attachment.filter(dsl::branch.eq(branch)))
			.await?)
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::test::test_env;

	#[tokio::test]
	async fn test_store_and_list() {
		let env = test_env().await;

		let record = env
			.attachment
			.store(
				NewAttachment {
					branch: 9,
					object: None,
					kind: AttachmentKind::Diagram,
				},
				"plan.svg",
				b"<svg/>",
			)
			.await
			.unwrap();
		assert!(record.file_path.ends_with("_plan.svg"));
		assert_eq!(std::fs::read(&record.file_path).unwrap(), b"<svg/>");

		let listed = env.attachment.attachments_of_branch(9).await.unwrap();
		assert_eq!(listed.len(), 1);
		assert_eq!(listed[0].id, record.id);
		assert_eq!(
			SqlAttachmentKind::from(listed[0].kind),
			SqlAttachmentKind::Diagram
		);

		assert!(env.attachment.attachments_of_branch(10).await.unwrap().is_empty());
	}
}

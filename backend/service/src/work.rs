use std::sync::Arc;

use diesel::{ExpressionMethods, QueryDsl, insert_into};
use pergola_backend_model::{
	branch::BranchRef,
	db::schema::completed_work::dsl,
	object::ObjectRef,
	work::{WorkRecord, WorkRef},
};
use serde::Deserialize;
use time::PrimitiveDateTime;
use tracing::info;

use crate::{Result, database::DatabaseService};

/// Completed-work log operations.
#[derive(Debug)]
pub struct WorkLogService {
	db: Arc<DatabaseService>,
}

/// Fields of a completed-work entry to be logged.
#[derive(Debug, PartialEq, Eq, Clone, Deserialize)]
pub struct NewWork {
	pub branch_id: BranchRef,
	pub object_id: Option<ObjectRef>,
	pub work_type: String,
	pub completion_date: PrimitiveDateTime,
	pub responsible_person: String,
	pub notes: Option<String>,
}

impl WorkLogService {
	pub fn new(db: Arc<DatabaseService>) -> Self {
		Self { db }
	}

	/// Logs an upkeep task as carried out.
	pub async fn create(&self, work: NewWork) -> Result<WorkRef> {
		let mut conn = self.db.get().await?;
		let id = conn
			.get_result::<_, WorkRef>(
				insert_into(dsl::completed_work)
					.values((
						dsl::branch.eq(work.branch_id),
						dsl::object.eq(work.object_id),
						dsl::work_type.eq(&work.work_type),
						dsl::completed_at.eq(work.completion_date),
						dsl::responsible.eq(&work.responsible_person),
						dsl::notes.eq(work.notes.as_deref()),
					))
					.returning(dsl::id),
			)
			.await?;
		info!(work = id, branch = work.branch_id, "logged completed work");

		Ok(id)
	}

	/// Lists all completed works of a branch. Unknown branches yield an
	/// empty list.
	pub async fn works_of_branch(&self, branch: BranchRef) -> Result<Vec<WorkRecord>> {
		let mut conn = self.db.get().await?;
		Ok(conn
			.load_select(dsl::completed_work.filter(dsl::branch.eq(branch)))
			.await?)
	}
}

#[cfg(test)]
mod test {
	use time::macros::datetime;

	use super::*;
	use crate::test::test_env;

	#[tokio::test]
	async fn test_create_and_list() {
		let env = test_env().await;

		let id = env
			.work_log
			.create(NewWork {
				branch_id: 3,
				object_id: Some(10),
				work_type: "уборка снега".to_string(),
				completion_date: datetime!(2026-01-15 08:30),
				responsible_person: "Иванов И. И.".to_string(),
				notes: Some("дорожки и крыльцо".to_string()),
			})
			.await
			.unwrap();

		let works = env.work_log.works_of_branch(3).await.unwrap();
		assert_eq!(works.len(), 1);
		assert_eq!(works[0].id, id);
		assert_eq!(works[0].responsible, "Иванов И. И.");
		assert_eq!(works[0].object, Some(10));

		assert!(env.work_log.works_of_branch(4).await.unwrap().is_empty());
	}
}

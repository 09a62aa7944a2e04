use std::sync::Arc;

use diesel::{
	BoolExpressionMethods, ExpressionMethods, OptionalExtension, QueryDsl,
	TextExpressionMethods, insert_into, update,
};
use pergola_backend_model::{
	branch::{BranchRecord, BranchRef},
	db::schema::{self, branch::dsl},
};
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::{BackendError, Result, database::DatabaseService};

/// Branch registry operations.
#[derive(Debug)]
pub struct BranchService {
	db: Arc<DatabaseService>,
}

/// Fields of a branch to be registered.
#[derive(Debug, PartialEq, Eq, Clone, Deserialize)]
pub struct NewBranch {
	pub address: String,
	pub internal_code: String,
	pub latitude: String,
	pub longitude: String,
}

/// Partial overwrite of a branch.
///
/// A field that is absent from the request stays untouched; a field
/// that is present is written verbatim, empty strings included.
#[derive(Debug, PartialEq, Eq, Clone, Default, Deserialize, diesel::AsChangeset)]
#[diesel(table_name = schema::branch)]
pub struct BranchPatch {
	pub address: Option<String>,
	pub internal_code: Option<String>,
	pub latitude: Option<String>,
	pub longitude: Option<String>,
}

impl BranchPatch {
	pub fn is_empty(&self) -> bool {
		self.address.is_none()
			&& self.internal_code.is_none()
			&& self.latitude.is_none()
			&& self.longitude.is_none()
	}
}

impl BranchService {
	pub fn new(db: Arc<DatabaseService>) -> Self {
		Self { db }
	}

	/// Registers a new branch.
	///
	/// The duplicate check and the insert run in one transaction; the
	/// unique index on the internal code backstops concurrent inserts.
	pub async fn create(&self, info: NewBranch) -> Result<BranchRef> {
		let mut conn = self.db.get().await?;

		let id = conn
			.transaction::<BranchRef, BackendError, _>(async |conn| {
				let duplicate = conn
					.first::<_, BranchRef>(
						dsl::branch
							.select(dsl::id)
							.filter(dsl::internal_code.eq(&info.internal_code)),
					)
					.await
					.optional()?;
				if duplicate.is_some() {
					return Err(
						BranchError::DuplicateCode(info.internal_code.clone()).into()
					);
				}

				Ok(conn
					.get_result::<_, BranchRef>(
						insert_into(dsl::branch)
							.values((
								dsl::address.eq(&info.address),
								dsl::internal_code.eq(&info.internal_code),
								dsl::latitude.eq(&info.latitude),
								dsl::longitude.eq(&info.longitude),
							))
							.returning(dsl::id),
					)
					.await?)
			})
			.await?;
		info!(branch = id, code = %info.internal_code, "registered branch");

		Ok(id)
	}

	/// Applies a partial overwrite to a branch.
	pub async fn update(&self, id: BranchRef, patch: BranchPatch) -> Result<()> {
		let mut conn = self.db.get().await?;

		let target = conn
			.first::<_, BranchRef>(dsl::branch.select(dsl::id).filter(dsl::id.eq(id)))
			.await
			.optional()?;
		if target.is_none() {
			return Err(BranchError::NotFound(id).into());
		}
		if patch.is_empty() {
			return Ok(());
		}

		conn.execute(update(dsl::branch.filter(dsl::id.eq(id))).set(&patch))
			.await?;
		info!(branch = id, "updated branch");

		Ok(())
	}

	/// Lists branches whose address or internal code contains `pattern`.
	///
	/// An empty pattern matches every branch.
	pub async fn search(&self, pattern: &str) -> Result<Vec<BranchRecord>> {
		let mut conn = self.db.get().await?;
		let pattern = format!("%{pattern}%");
		Ok(conn
			.load_select(dsl::branch.filter(
				dsl::address
					.like(pattern.clone())
					.or(dsl::internal_code.like(pattern)),
			))
			.await?)
	}
}

#[derive(Debug, Error)]
pub enum BranchError {
	#[error("branch {0} not found")]
	NotFound(BranchRef),
	#[error("internal code {0:?} is already in use")]
	DuplicateCode(String),
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::test::test_env;

	fn sample_branch() -> NewBranch {
		NewBranch {
			address: "г. Казань, ул. Баумана, 7".to_string(),
			internal_code: "8610-077".to_string(),
			latitude: "55.79".to_string(),
			longitude: "49.11".to_string(),
		}
	}

	#[tokio::test]
	async fn test_create_and_search() {
		let env = test_env().await;
		let id = env.branch.create(sample_branch()).await.unwrap();

		let found = env.branch.search("Баумана").await.unwrap();
		assert_eq!(found.len(), 1);
		assert_eq!(found[0].id, id);
		assert_eq!(found[0].internal_code, "8610-077");

		// internal code is searchable too
		assert_eq!(env.branch.search("8610").await.unwrap().len(), 1);
		assert!(env.branch.search("nothing here").await.unwrap().is_empty());
	}

	#[tokio::test]
	async fn test_create_duplicate_code() {
		let env = test_env().await;
		env.branch.create(sample_branch()).await.unwrap();

		let mut other = sample_branch();
		other.address = "г. Казань, ул. Кремлёвская, 1".to_string();
		let err = env.branch.create(other).await.unwrap_err();
		assert!(matches!(
			err,
			BackendError::BranchError(BranchError::DuplicateCode(code)) if code == "8610-077"
		));
	}

	#[tokio::test]
	async fn test_update_patches_present_fields_only() {
		let env = test_env().await;
		let id = env.branch.create(sample_branch()).await.unwrap();

		env.branch
			.update(
				id,
				BranchPatch {
					address: Some("г. Казань, ул. Баумана, 9".to_string()),
					..Default::default()
				},
			)
			.await
			.unwrap();

		let found = env.branch.search("8610-077").await.unwrap();
		assert_eq!(found[0].address, "г. Казань, ул. Баумана, 9");
		// untouched fields survive
		assert_eq!(found[0].latitude, "55.79");
	}

	#[tokio::test]
	async fn test_update_writes_empty_strings_verbatim() {
		let env = test_env().await;
		let id = env.branch.create(sample_branch()).await.unwrap();

		env.branch
			.update(
				id,
				BranchPatch {
					latitude: Some(String::new()),
					..Default::default()
				},
			)
			.await
			.unwrap();

		let found = env.branch.search("8610-077").await.unwrap();
		assert_eq!(found[0].latitude, "");
		assert_eq!(found[0].longitude, "49.11");
	}

	#[tokio::test]
	async fn test_update_empty_patch_is_a_no_op() {
		let env = test_env().await;
		let id = env.branch.create(sample_branch()).await.unwrap();

		env.branch.update(id, BranchPatch::default()).await.unwrap();

		let found = env.branch.search("8610-077").await.unwrap();
		assert_eq!(found[0].address, "г. Казань, ул. Баумана, 7");
	}

	#[tokio::test]
	async fn test_update_missing_branch() {
		let env = test_env().await;
		let err = env
			.branch
			.update(404, BranchPatch::default())
			.await
			.unwrap_err();
		assert!(matches!(
			err,
			BackendError::BranchError(BranchError::NotFound(404))
		));
	}
}

use std::sync::Arc;

use diesel::{ExpressionMethods, OptionalExtension, QueryDsl, insert_into};
use pergola_backend_model::{
	branch::BranchRef,
	db::schema::{branch::dsl as branch_dsl, branch_object::dsl},
	object::{ObjectRecord, ObjectRef},
};
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::{Result, database::DatabaseService};

/// Grounds-object registry operations.
#[derive(Debug)]
pub struct ObjectService {
	db: Arc<DatabaseService>,
}

/// Fields of a grounds object to be registered.
#[derive(Debug, PartialEq, Clone, Deserialize)]
pub struct NewObject {
	pub branch_id: BranchRef,
	pub object_type_id: i64,
	pub name: String,
	pub area: f64,
	pub description: Option<String>,
}

impl ObjectService {
	pub fn new(db: Arc<DatabaseService>) -> Self {
		Self { db }
	}

	/// Registers a maintainable object under an existing branch.
	pub async fn create(&self, info: NewObject) -> Result<ObjectRef> {
		let mut conn = self.db.get().await?;

		// objects must not reference a branch that was never registered
		let owner = conn
			.first::<_, BranchRef>(
				branch_dsl::branch
					.select(branch_dsl::id)
					.filter(branch_dsl::id.eq(info.branch_id)),
			)
			.await
			.optional()?;
		if owner.is_none() {
			return Err(ObjectError::BranchNotFound(info.branch_id).into());
		}

		let id = conn
			.get_result::<_, ObjectRef>(
				insert_into(dsl::branch_object)
					.values((
						dsl::branch.eq(info.branch_id),
						dsl::object_type.eq(info.object_type_id),
						dsl::name.eq(&info.name),
						dsl::area.eq(info.area),
						dsl::description.eq(info.description.as_deref()),
					))
					.returning(dsl::id),
			)
			.await?;
		info!(object = id, branch = info.branch_id, "registered grounds object");

		Ok(id)
	}

	/// Lists all objects of a branch. Unknown branches yield an empty list.
	pub async fn objects_of_branch(&self, branch: BranchRef) -> Result<Vec<ObjectRecord>> {
		let mut conn = self.db.get().await?;
		Ok(conn
			.load_select(dsl::branch_object.filter(dsl::branch.eq(branch)))
			.await?)
	}
}

#[derive(Debug, Error)]
pub enum ObjectError {
	#[error("branch {0} not found")]
	BranchNotFound(BranchRef),
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::{BackendError, branch::NewBranch, test::test_env};

	#[tokio::test]
	async fn test_create_and_list() {
		let env = test_env().await;
		let branch = env
			.branch
			.create(NewBranch {
				address: "пр. Мира, 1".to_string(),
				internal_code: "001".to_string(),
				latitude: "0".to_string(),
				longitude: "0".to_string(),
			})
			.await
			.unwrap();

		let id = env
			.object
			.create(NewObject {
				branch_id: branch,
				object_type_id: 1,
				name: "газон у входа".to_string(),
				area: 120.5,
				description: None,
			})
			.await
			.unwrap();

		let objects = env.object.objects_of_branch(branch).await.unwrap();
		assert_eq!(objects.len(), 1);
		assert_eq!(objects[0].id, id);
		assert_eq!(objects[0].area, 120.5);

		assert!(env.object.objects_of_branch(branch + 1).await.unwrap().is_empty());
	}

	#[tokio::test]
	async fn test_create_requires_branch() {
		let env = test_env().await;
		let err = env
			.object
			.create(NewObject {
				branch_id: 77,
				object_type_id: 1,
				name: "тротуар".to_string(),
				area: 30.0,
				description: None,
			})
			.await
			.unwrap_err();
		assert!(matches!(
			err,
			BackendError::ObjectError(ObjectError::BranchNotFound(77))
		));
	}
}

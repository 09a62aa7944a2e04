use std::sync::Arc;

use diesel::{ExpressionMethods, QueryDsl, insert_into};
use pergola_backend_model::{
	branch::BranchRef,
	db::schema::maintenance_plan::dsl,
	maintenance::{PlanRecord, PlanRef},
	object::ObjectRef,
};
use serde::Deserialize;
use time::PrimitiveDateTime;
use tracing::info;

use crate::{Result, database::DatabaseService};

/// Maintenance schedule operations.
#[derive(Debug)]
pub struct MaintenanceService {
	db: Arc<DatabaseService>,
}

/// Fields of a maintenance plan to be scheduled.
#[derive(Debug, PartialEq, Eq, Clone, Deserialize)]
pub struct NewPlan {
	pub branch_id: BranchRef,
	pub object_id: Option<ObjectRef>,
	pub work_type: String,
	pub frequency: String,
	pub next_maintenance_date: PrimitiveDateTime,
}

impl MaintenanceService {
	pub fn new(db: Arc<DatabaseService>) -> Self {
		Self { db }
	}

	/// Schedules a recurring upkeep task.
	pub async fn create(&self, plan: NewPlan) -> Result<PlanRef> {
		let mut conn = self.db.get().await?;
		let id = conn
			.get_result::<_, PlanRef>(
				insert_into(dsl::maintenance_plan)
					.values((
						dsl::branch.eq(plan.branch_id),
						dsl::object.eq(plan.object_id),
						dsl::work_type.eq(&plan.work_type),
						dsl::frequency.eq(&plan.frequency),
						dsl::next_due_at.eq(plan.next_maintenance_date),
					))
					.returning(dsl::id),
			)
			.await?;
		info!(plan = id, branch = plan.branch_id, work = %plan.work_type, "scheduled maintenance");

		Ok(id)
	}

	/// Lists all plans of a branch. Unknown branches yield an empty list.
	pub async fn plans_of_branch(&self, branch: BranchRef) -> Result<Vec<PlanRecord>> {
		let mut conn = self.db.get().await?;
		Ok(conn
			.load_select(dsl::maintenance_plan.filter(dsl::branch.eq(branch)))
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
			.maintenance
			.create(NewPlan {
				branch_id: 5,
				object_id: None,
				work_type: "покос газона".to_string(),
				frequency: "раз в 2 недели".to_string(),
				next_maintenance_date: datetime!(2026-05-01 09:00),
			})
			.await
			.unwrap();

		let plans = env.maintenance.plans_of_branch(5).await.unwrap();
		assert_eq!(plans.len(), 1);
		assert_eq!(plans[0].id, id);
		assert_eq!(plans[0].next_due_at, datetime!(2026-05-01 09:00));
	}

	#[tokio::test]
	async fn test_list_unknown_branch_is_empty() {
		let env = test_env().await;
		assert!(env.maintenance.plans_of_branch(404).await.unwrap().is_empty());
	}
}

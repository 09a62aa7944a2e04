use diesel::{Queryable, Selectable};
use time::PrimitiveDateTime;

use crate::{branch::BranchRef, object::ObjectRef};

pub type PlanRef = i64;

/// Stored representation of a scheduled recurring upkeep task.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable)]
#[diesel(table_name = crate::db::schema::maintenance_plan)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PlanRecord {
	pub id: PlanRef,
	pub branch: BranchRef,
	pub object: Option<ObjectRef>,
	pub work_type: String,
	pub frequency: String,
	pub next_due_at: PrimitiveDateTime,
}

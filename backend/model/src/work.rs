use diesel::{Queryable, Selectable};
use time::PrimitiveDateTime;

use crate::{branch::BranchRef, object::ObjectRef};

pub type WorkRef = i64;

/// Stored log entry for an upkeep task that has been carried out.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable)]
#[diesel(table_name = crate::db::schema::completed_work)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct WorkRecord {
	pub id: WorkRef,
	pub branch: BranchRef,
	pub object: Option<ObjectRef>,
	pub work_type: String,
	pub completed_at: PrimitiveDateTime,
	pub responsible: String,
	pub notes: Option<String>,
}

use diesel::{Queryable, Selectable};

use crate::branch::BranchRef;

pub type ObjectRef = i64;

/// Stored representation of a maintainable feature of a branch's
/// grounds (lawn, sidewalk, entrance, ...).
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = crate::db::schema::branch_object)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ObjectRecord {
	pub id: ObjectRef,
	pub branch: BranchRef,
	pub object_type: i64,
	pub name: String,
	pub area: f64,
	pub description: Option<String>,
}

use diesel::{Queryable, Selectable};

pub type BranchRef = i64;

/// Stored representation of a bank branch and its grounds location.
///
/// Coordinates are kept as free-text strings; the surveying data they
/// come from is not uniform enough for numeric columns.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable)]
#[diesel(table_name = crate::db::schema::branch)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct BranchRecord {
	pub id: BranchRef,
	pub address: String,
	pub internal_code: String,
	pub latitude: String,
	pub longitude: String,
}

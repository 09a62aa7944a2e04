use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct ApiWorkInfo {
	pub id: i64,
	pub branch_id: i64,
	pub object_id: Option<i64>,
	pub work_type: String,
	pub completion_date: PrimitiveDateTime,
	pub responsible_person: String,
	pub notes: Option<String>,
}

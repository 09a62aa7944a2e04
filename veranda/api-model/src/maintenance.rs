use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct ApiPlanInfo {
	pub id: i64,
	pub branch_id: i64,
	pub object_id: Option<i64>,
	pub work_type: String,
	pub frequency: String,
	pub next_maintenance_date: PrimitiveDateTime,
}

use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct ApiObjectInfo {
	pub id: i64,
	pub branch_id: i64,
	pub object_type_id: i64,
	pub name: String,
	pub area: f64,
	pub description: Option<String>,
}

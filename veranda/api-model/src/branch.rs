use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct ApiBranchInfo {
	pub id: i64,
	pub address: String,
	pub internal_code: String,
	pub latitude: String,
	pub longitude: String,
}

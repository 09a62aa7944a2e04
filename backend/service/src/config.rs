use serde::{Deserialize, Serialize};

use crate::{database::DatabaseConfig, storage::StorageConfig};

#[derive(Debug, PartialEq, Eq, Clone, Hash, Deserialize, Serialize)]
pub struct BackendConfig {
	pub database: DatabaseConfig,
	#[serde(default)]
	pub storage: StorageConfig,
}

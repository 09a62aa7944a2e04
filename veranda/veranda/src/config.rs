use pergola_backend_service::{
	config::BackendConfig, database::DatabaseConfig, storage::StorageConfig,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Eq, Clone, Hash, Deserialize, Serialize)]
pub struct VerandaConfig {
	pub web: WebConfig,
	pub database: DatabaseConfig,
	#[serde(default)]
	pub storage: StorageConfig,
}

impl From<VerandaConfig> for BackendConfig {
	fn from(config: VerandaConfig) -> Self {
		BackendConfig {
			database: config.database,
			storage: config.storage,
		}
	}
}

#[derive(Debug, PartialEq, Eq, Clone, Hash, Deserialize, Serialize)]
pub struct WebConfig {
	/// Address for the web server to listen on.
	///
	/// Examples:
	/// - `unix://veranda.socket`
	/// - `tcp://127.0.0.1:9080`
	pub listen: String,
}

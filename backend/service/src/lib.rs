//! Pergola backend services.

use std::sync::Arc;

use assistant::AssistantService;
use attachment::AttachmentService;
use branch::{BranchError, BranchService};
use config::BackendConfig;
use database::{DatabaseError, DatabaseService};
use maintenance::MaintenanceService;
use object::{ObjectError, ObjectService};
use storage::{StorageError, StorageService};
use thiserror::Error;
use work::WorkLogService;

pub mod assistant;
pub mod attachment;
pub mod branch;
pub mod config;
pub mod database;
pub mod maintenance;
pub mod object;
pub mod storage;
pub mod work;

/// Service container for Pergola backends.
///
/// All services are wrapped with [`Arc`]. The container is the only way
/// services are constructed; nothing here lives in module-level state.
#[derive(Debug, Clone)]
pub struct BackendServices {
	pub config: Arc<BackendConfig>,
	pub database: Arc<DatabaseService>,
	pub storage: Arc<StorageService>,
	pub branch: Arc<BranchService>,
	pub object: Arc<ObjectService>,
	pub maintenance: Arc<MaintenanceService>,
	pub work_log: Arc<WorkLogService>,
	pub attachment: Arc<AttachmentService>,
	pub assistant: Arc<AssistantService>,
}

impl BackendServices {
	#[tracing::instrument(skip(config))]
	pub async fn new(config: BackendConfig) -> Result<Self> {
		let config = Arc::new(config);
		let database = Arc::new(DatabaseService::new(&config.database).await?);
		let storage = Arc::new(StorageService::new(&config.storage));
		let branch = Arc::new(BranchService::new(database.clone()));
		let object = Arc::new(ObjectService::new(database.clone()));
		let maintenance = Arc::new(MaintenanceService::new(database.clone()));
		let work_log = Arc::new(WorkLogService::new(database.clone()));
		let attachment = Arc::new(AttachmentService::new(database.clone(), storage.clone()));
		let assistant = Arc::new(AssistantService::new(maintenance.clone(), work_log.clone()));

		Ok(Self {
			config,
			database,
			storage,
			branch,
			object,
			maintenance,
			work_log,
			attachment,
			assistant,
		})
	}
}

/// Backend errors.
#[derive(Debug, Error)]
pub enum BackendError {
	#[error(transparent)]
	DatabaseError(#[from] DatabaseError),
	#[error(transparent)]
	StorageError(#[from] StorageError),
	#[error(transparent)]
	BranchError(#[from] BranchError),
	#[error(transparent)]
	ObjectError(#[from] ObjectError),
}

/// A specialized [`Result`] for backend errors.
pub type Result<T, E = BackendError> = std::result::Result<T, E>;

impl From<diesel::result::Error> for BackendError {
	fn from(value: diesel::result::Error) -> Self {
		Self::DatabaseError(DatabaseError::QueryError(value))
	}
}

#[cfg(test)]
pub(crate) mod test {
	use crate::{database::DatabaseConfig, storage::StorageConfig};

	use crate::*;

	pub async fn test_env() -> BackendServices {
		let config = BackendConfig {
			database: DatabaseConfig {
				url: "sqlite://:memory:".to_string(),
				max_connections: 1,
			},
			storage: StorageConfig {
				root: std::env::temp_dir()
					.join(format!("pergola-test-{}", uuid::Uuid::now_v7())),
			},
		};
		BackendServices::new(config).await.unwrap()
	}

	#[tokio::test]
	async fn test_init_services() {
		let env = test_env().await;
		assert!(env.branch.search("").await.unwrap().is_empty());
	}
}

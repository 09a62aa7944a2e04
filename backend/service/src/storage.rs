use std::{
	ffi::OsStr,
	path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::fs;
use uuid::Uuid;

/// Configuration for [`StorageService`].
#[derive(Debug, PartialEq, Eq, Clone, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct StorageConfig {
	/// Directory receiving uploaded attachment files.
	///
	/// Created on first upload if missing.
	#[serde(default = "default_root")]
	pub root: PathBuf,
}

fn default_root() -> PathBuf {
	PathBuf::from("uploads")
}

impl Default for StorageConfig {
	fn default() -> Self {
		Self {
			root: default_root(),
		}
	}
}

/// Attachment file storage.
///
/// Files are stored flat under the configured root, each under a fresh
/// `<uuid>_<original name>` name so repeated uploads of the same file
/// never collide.
#[derive(Debug)]
pub struct StorageService {
	root: PathBuf,
}

impl StorageService {
	pub fn new(config: &StorageConfig) -> Self {
		Self {
			root: config.root.clone(),
		}
	}

	/// Persists one uploaded payload, returning the stored path.
	pub async fn save(&self, file_name: &str, data: &[u8]) -> Result<String, StorageError> {
		// client-supplied names may carry directory components; only the
		// final component is kept
		let file_name = Path::new(file_name)
			.file_name()
			.and_then(OsStr::to_str)
			.unwrap_or("file");
		let stored_name = format!("{}_{}", Uuid::now_v7(), file_name);

		fs::create_dir_all(&self.root).await?;
		let path = self.root.join(stored_name);
		fs::write(&path, data).await?;

		Ok(path.to_string_lossy().into_owned())
	}
}

#[derive(Debug, Error)]
pub enum StorageError {
	#[error("upload I/O error: {0}")]
	Io(#[from] std::io::Error),
}

#[cfg(test)]
mod test {
	use super::*;

	#[tokio::test]
	async fn test_save_keeps_original_name_suffix() {
		let dir = tempfile::tempdir().unwrap();
		let storage = StorageService::new(&StorageConfig {
			root: dir.path().to_path_buf(),
		});

		let path = storage.save("mowing-map.png", b"png data").await.unwrap();
		assert!(path.ends_with("_mowing-map.png"));
		assert_eq!(std::fs::read(&path).unwrap(), b"png data");
	}

	#[tokio::test]
	async fn test_save_strips_directories() {
		let dir = tempfile::tempdir().unwrap();
		let storage = StorageService::new(&StorageConfig {
			root: dir.path().to_path_buf(),
		});

		let path = storage.save("../../etc/passwd", b"x").await.unwrap();
		let stored = Path::new(&path);
		assert_eq!(stored.parent().unwrap(), dir.path());
		assert!(path.ends_with("_passwd"));
	}

	#[tokio::test]
	async fn test_save_twice_never_collides() {
		let dir = tempfile::tempdir().unwrap();
		let storage = StorageService::new(&StorageConfig {
			root: dir.path().to_path_buf(),
		});

		let first = storage.save("report.pdf", b"one").await.unwrap();
		let second = storage.save("report.pdf", b"two").await.unwrap();
		assert_ne!(first, second);
		assert_eq!(std::fs::read(&first).unwrap(), b"one");
		assert_eq!(std::fs::read(&second).unwrap(), b"two");
	}
}

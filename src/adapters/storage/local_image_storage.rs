//! Local Filesystem Image Storage Adapter - Implementation of ImageStorage.
//!
//! Saves uploaded tool images inside the public directory so the static
//! file server can expose them under the same relative path.

use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

use crate::ports::{ImageStorage, ImageStorageError};

/// Sub-directory of the public root that receives uploads.
pub const IMAGES_DIR: &str = "images";

const MAX_EXTENSION_LEN: usize = 8;

/// Local filesystem storage for tool images.
///
/// # Directory Structure
///
/// ```text
/// {public_root}/
/// ├── index.html
/// └── images/
///     ├── 0b6f....png
///     └── 9d12....jpg
/// ```
#[derive(Debug, Clone)]
pub struct LocalImageStorage {
    public_root: PathBuf,
}

impl LocalImageStorage {
    /// Creates image storage rooted at the public directory.
    pub fn new(public_root: impl Into<PathBuf>) -> Self {
        Self {
            public_root: public_root.into(),
        }
    }

    /// Resolve a public path to a file under the root.
    ///
    /// Only plain relative components are accepted.
    fn resolve(&self, public_path: &str) -> Result<PathBuf, ImageStorageError> {
        let relative = Path::new(public_path);
        let is_plain = !public_path.is_empty()
            && relative
                .components()
                .all(|c| matches!(c, Component::Normal(_)));
        if !is_plain {
            return Err(ImageStorageError::InvalidPath(public_path.to_string()));
        }
        Ok(self.public_root.join(relative))
    }
}

#[async_trait]
impl ImageStorage for LocalImageStorage {
    fn allocate(&self, original_file_name: Option<&str>) -> String {
        let id = Uuid::new_v4().simple();
        match original_file_name.and_then(sanitized_extension) {
            Some(ext) => format!("{}/{}.{}", IMAGES_DIR, id, ext),
            None => format!("{}/{}", IMAGES_DIR, id),
        }
    }

    async fn write(&self, public_path: &str, bytes: &[u8]) -> Result<(), ImageStorageError> {
        let file_path = self.resolve(public_path)?;

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                ImageStorageError::IoError(format!("Failed to create directory: {}", e))
            })?;
        }

        let temp_path = file_path.with_extension("tmp");
        let mut file = fs::File::create(&temp_path).await.map_err(|e| {
            ImageStorageError::IoError(format!("Failed to create temporary file: {}", e))
        })?;
        file.write_all(bytes).await.map_err(|e| {
            ImageStorageError::IoError(format!("Failed to write temporary file: {}", e))
        })?;
        file.sync_all()
            .await
            .map_err(|e| ImageStorageError::IoError(format!("Failed to sync file: {}", e)))?;
        drop(file);

        fs::rename(&temp_path, &file_path)
            .await
            .map_err(|e| ImageStorageError::IoError(format!("Failed to rename file: {}", e)))?;

        tracing::debug!(path = %file_path.display(), size = bytes.len(), "Stored tool image");
        Ok(())
    }

    async fn remove(&self, public_path: &str) -> Result<(), ImageStorageError> {
        let file_path = self.resolve(public_path)?;
        match fs::remove_file(&file_path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ImageStorageError::IoError(format!(
                "Failed to remove file: {}",
                e
            ))),
        }
    }
}

/// Lowercased extension of `file_name` if it is short and alphanumeric.
fn sanitized_extension(file_name: &str) -> Option<String> {
    let ext = Path::new(file_name).extension()?.to_str()?;
    let valid = !ext.is_empty()
        && ext.len() <= MAX_EXTENSION_LEN
        && ext.chars().all(|c| c.is_ascii_alphanumeric());
    valid.then(|| ext.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn allocate_keeps_clean_extension() {
        let storage = LocalImageStorage::new("/unused");
        let path = storage.allocate(Some("Claw Hammer.PNG"));
        assert!(path.starts_with("images/"));
        assert!(path.ends_with(".png"));
    }

    #[test]
    fn allocate_drops_suspicious_extension() {
        let storage = LocalImageStorage::new("/unused");
        assert!(!storage.allocate(Some("x.p/ng")).contains("p/ng"));
        assert_eq!(storage.allocate(Some("x.toolongextension")).matches('.').count(), 0);
        assert_eq!(storage.allocate(None).matches('.').count(), 0);
    }

    #[test]
    fn allocate_never_collides() {
        let storage = LocalImageStorage::new("/unused");
        assert_ne!(storage.allocate(Some("a.png")), storage.allocate(Some("a.png")));
    }

    #[tokio::test]
    async fn write_then_remove_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalImageStorage::new(temp_dir.path());
        let public_path = storage.allocate(Some("h.png"));

        storage.write(&public_path, b"\x89PNG").await.unwrap();
        let on_disk = temp_dir.path().join(&public_path);
        assert_eq!(std::fs::read(&on_disk).unwrap(), b"\x89PNG");

        storage.remove(&public_path).await.unwrap();
        assert!(!on_disk.exists());
    }

    #[tokio::test]
    async fn remove_missing_file_is_ok() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalImageStorage::new(temp_dir.path());
        assert!(storage.remove("images/nothing.png").await.is_ok());
    }

    #[tokio::test]
    async fn escaping_paths_are_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let storage = LocalImageStorage::new(temp_dir.path());

        for bad in ["../outside.png", "/etc/passwd", "images/../../x", ""] {
            let result = storage.write(bad, b"data").await;
            assert!(
                matches!(result, Err(ImageStorageError::InvalidPath(_))),
                "{} should be rejected",
                bad
            );
        }
    }
}

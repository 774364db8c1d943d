//! Image Storage Port - Filesystem operations for uploaded tool images.
//!
//! Images are addressed by their public path (for example
//! `images/3f2c....png`), which is also what gets stored in a tool's
//! `img_name` and what the static file server exposes.

use async_trait::async_trait;
use thiserror::Error;

/// Port for storing uploaded tool images.
///
/// # Contract
///
/// Implementations must:
/// - Hand out public paths that never collide
/// - Write atomically (no partial image on failure)
/// - Refuse public paths that escape the storage root
#[async_trait]
pub trait ImageStorage: Send + Sync {
    /// Reserve a fresh public path for an upload.
    ///
    /// The original file name only contributes its extension.
    fn allocate(&self, original_file_name: Option<&str>) -> String;

    /// Write image bytes at a previously allocated public path.
    async fn write(&self, public_path: &str, bytes: &[u8]) -> Result<(), ImageStorageError>;

    /// Delete an image. Missing files are not an error.
    async fn remove(&self, public_path: &str) -> Result<(), ImageStorageError>;
}

/// Errors from image storage operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ImageStorageError {
    #[error("Invalid image path: {0}")]
    InvalidPath(String),

    #[error("IO error: {0}")]
    IoError(String),
}

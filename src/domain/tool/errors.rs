//! Tool-specific error types.

use crate::ports::{ImageStorageError, StoreError};

use super::{ToolId, ToolValidationError};

/// Errors surfaced by the tool use cases.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolError {
    /// Payload broke one or more field rules.
    Validation(ToolValidationError),
    /// Uploaded file was rejected before reaching storage.
    InvalidUpload(String),
    /// No tool with this id.
    NotFound(ToolId),
    /// Persistence failed.
    Storage(String),
}

impl ToolError {
    pub fn invalid_upload(message: impl Into<String>) -> Self {
        ToolError::InvalidUpload(message.into())
    }

    pub fn storage(message: impl Into<String>) -> Self {
        ToolError::Storage(message.into())
    }

    /// True for errors caused by the caller rather than the server.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, ToolError::Storage(_))
    }

    pub fn message(&self) -> String {
        match self {
            ToolError::Validation(err) => err.first().to_string(),
            ToolError::InvalidUpload(msg) => format!("Invalid upload: {}", msg),
            ToolError::NotFound(id) => format!("Tool not found: {}", id),
            ToolError::Storage(msg) => format!("Storage error: {}", msg),
        }
    }
}

impl std::fmt::Display for ToolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ToolError {}

impl From<ToolValidationError> for ToolError {
    fn from(err: ToolValidationError) -> Self {
        ToolError::Validation(err)
    }
}

impl From<StoreError> for ToolError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => ToolError::NotFound(id),
            other => ToolError::Storage(other.to_string()),
        }
    }
}

impl From<ImageStorageError> for ToolError {
    fn from(err: ImageStorageError) -> Self {
        match err {
            ImageStorageError::InvalidPath(path) => {
                ToolError::InvalidUpload(format!("invalid image path: {}", path))
            }
            other => ToolError::Storage(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tool::validate_tool;

    #[test]
    fn store_not_found_maps_to_not_found() {
        let err: ToolError = StoreError::NotFound(ToolId::new(3)).into();
        assert_eq!(err, ToolError::NotFound(ToolId::new(3)));
        assert!(err.is_client_error());
    }

    #[test]
    fn store_io_maps_to_storage() {
        let err: ToolError = StoreError::Io("disk full".to_string()).into();
        assert!(matches!(err, ToolError::Storage(ref msg) if msg.contains("disk full")));
        assert!(!err.is_client_error());
    }

    #[test]
    fn validation_message_is_first_violation() {
        let validation = validate_tool(&serde_json::json!({})).unwrap_err();
        let err: ToolError = validation.into();
        assert_eq!(err.message(), "\"name\" is required");
    }
}

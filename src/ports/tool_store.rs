//! Tool Store Port - Interface for persisting the tool catalog.
//!
//! Two adapters implement this port: a JSON document on disk with an
//! in-memory working copy, and a PostgreSQL table. Call sites never know
//! which one is active.

use async_trait::async_trait;

use crate::domain::tool::{Tool, ToolDraft, ToolId};

/// Errors that can occur during tool store operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    #[error("Tool not found: {0}")]
    NotFound(ToolId),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Failed to serialize tools: {0}")]
    Serialization(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("No tool ids left after {0}")]
    IdsExhausted(ToolId),
}

/// Port for CRUD persistence of tools.
///
/// # Contract
///
/// Implementations must:
/// - Assign ids on insert that are unique and never reused
/// - Return tools from `list` in ascending id order
/// - Report a missing id as `StoreError::NotFound` without side effects
#[async_trait]
pub trait ToolStore: Send + Sync {
    /// List every tool, ordered by ascending id.
    async fn list(&self) -> Result<Vec<Tool>, StoreError>;

    /// Check whether a tool with this id is stored.
    async fn exists(&self, id: ToolId) -> Result<bool, StoreError>;

    /// Persist a new tool and return it with its assigned id.
    ///
    /// # Errors
    /// Returns `StoreError` if the write fails
    async fn insert(&self, draft: ToolDraft) -> Result<Tool, StoreError>;

    /// Replace every field of an existing tool except its id.
    ///
    /// # Errors
    /// Returns `StoreError::NotFound` if no tool has this id
    async fn update(&self, id: ToolId, draft: ToolDraft) -> Result<Tool, StoreError>;

    /// Delete a tool.
    ///
    /// # Errors
    /// Returns `StoreError::NotFound` if no tool has this id
    async fn remove(&self, id: ToolId) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_error_not_found_names_the_id() {
        let err = StoreError::NotFound(ToolId::new(99));
        assert_eq!(err.to_string(), "Tool not found: 99");
    }

    #[test]
    fn store_error_io_keeps_detail() {
        let err = StoreError::Io("permission denied".to_string());
        assert!(err.to_string().contains("permission denied"));
    }

    #[test]
    fn store_error_ids_exhausted_names_the_last_id() {
        let err = StoreError::IdsExhausted(ToolId::new(i64::MAX));
        assert_eq!(err.to_string(), format!("No tool ids left after {}", i64::MAX));
    }
}

//! ListToolsHandler - Query handler for the full catalog.

use std::sync::Arc;

use crate::domain::tool::{Tool, ToolError};
use crate::ports::ToolStore;

/// Handler for listing every tool.
pub struct ListToolsHandler {
    store: Arc<dyn ToolStore>,
}

impl ListToolsHandler {
    pub fn new(store: Arc<dyn ToolStore>) -> Self {
        Self { store }
    }

    /// Returns all tools in ascending id order.
    pub async fn handle(&self) -> Result<Vec<Tool>, ToolError> {
        Ok(self.store.list().await?)
    }
}

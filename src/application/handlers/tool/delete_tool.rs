//! DeleteToolHandler - Command handler for removing a tool.

use std::sync::Arc;

use crate::domain::tool::{ToolError, ToolId};
use crate::ports::ToolStore;

/// Command to delete a tool.
#[derive(Debug, Clone, Copy)]
pub struct DeleteToolCommand {
    pub id: ToolId,
}

/// Handler for deleting tools.
pub struct DeleteToolHandler {
    store: Arc<dyn ToolStore>,
}

impl DeleteToolHandler {
    pub fn new(store: Arc<dyn ToolStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: DeleteToolCommand) -> Result<(), ToolError> {
        self.store.remove(cmd.id).await?;
        tracing::info!(tool_id = %cmd.id, "Tool deleted");
        Ok(())
    }
}

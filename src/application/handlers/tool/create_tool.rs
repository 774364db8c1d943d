//! CreateToolHandler - Command handler for adding a tool to the catalog.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::tool::{Tool, ToolError};
use crate::ports::{ImageStorage, ToolStore};

use super::upload::{ImageUpload, StagedTool};

/// Command to create a tool from an untrusted payload.
#[derive(Debug, Clone)]
pub struct CreateToolCommand {
    pub payload: Value,
    pub image: Option<ImageUpload>,
}

/// Handler for creating tools.
pub struct CreateToolHandler {
    store: Arc<dyn ToolStore>,
    images: Arc<dyn ImageStorage>,
}

impl CreateToolHandler {
    pub fn new(store: Arc<dyn ToolStore>, images: Arc<dyn ImageStorage>) -> Self {
        Self { store, images }
    }

    pub async fn handle(&self, cmd: CreateToolCommand) -> Result<Tool, ToolError> {
        // 1. Validate (and place the upload, if any)
        let staged = StagedTool::prepare(self.images.as_ref(), cmd.payload, cmd.image)?;

        // 2. Write the image before the record that points at it
        staged.write_image(self.images.as_ref()).await?;

        // 3. Persist
        match self.store.insert(staged.draft.clone()).await {
            Ok(tool) => {
                tracing::info!(tool_id = %tool.id, name = %tool.name, "Tool created");
                Ok(tool)
            }
            Err(e) => {
                staged.discard_image(self.images.as_ref()).await;
                Err(e.into())
            }
        }
    }
}

//! UpdateToolHandler - Command handler for replacing a tool's fields.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::tool::{Tool, ToolError, ToolId};
use crate::ports::{ImageStorage, ToolStore};

use super::upload::{ImageUpload, StagedTool};

/// Command to replace every field of a tool except its id.
#[derive(Debug, Clone)]
pub struct UpdateToolCommand {
    pub id: ToolId,
    pub payload: Value,
    pub image: Option<ImageUpload>,
}

/// Handler for updating tools.
pub struct UpdateToolHandler {
    store: Arc<dyn ToolStore>,
    images: Arc<dyn ImageStorage>,
}

impl UpdateToolHandler {
    pub fn new(store: Arc<dyn ToolStore>, images: Arc<dyn ImageStorage>) -> Self {
        Self { store, images }
    }

    pub async fn handle(&self, cmd: UpdateToolCommand) -> Result<Tool, ToolError> {
        let staged = StagedTool::prepare(self.images.as_ref(), cmd.payload, cmd.image)?;

        // An unknown id must not leave an upload behind.
        if staged.has_image() && !self.store.exists(cmd.id).await? {
            return Err(ToolError::NotFound(cmd.id));
        }

        staged.write_image(self.images.as_ref()).await?;

        match self.store.update(cmd.id, staged.draft.clone()).await {
            Ok(tool) => {
                tracing::info!(tool_id = %tool.id, "Tool updated");
                Ok(tool)
            }
            Err(e) => {
                staged.discard_image(self.images.as_ref()).await;
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::upload::test_support::{hammer_payload, MockImageStorage, MockToolStore};
    use super::*;
    use crate::domain::tool::validate_tool;
    use serde_json::json;

    fn existing() -> Vec<Tool> {
        let draft = validate_tool(&hammer_payload()).unwrap();
        vec![Tool::from_draft(ToolId::new(1), draft)]
    }

    #[tokio::test]
    async fn replaces_fields_and_keeps_id() {
        let store = Arc::new(MockToolStore::with_tools(existing()));
        let handler = UpdateToolHandler::new(store.clone(), Arc::new(MockImageStorage::default()));
        let mut payload = hammer_payload();
        payload["name"] = json!("Sledgehammer");
        payload["id"] = json!(42);

        let tool = handler
            .handle(UpdateToolCommand {
                id: ToolId::new(1),
                payload,
                image: None,
            })
            .await
            .unwrap();

        assert_eq!(tool.id, ToolId::new(1));
        assert_eq!(tool.name, "Sledgehammer");
        assert_eq!(store.snapshot(), vec![tool]);
    }

    #[tokio::test]
    async fn short_name_leaves_collection_unchanged() {
        let store = Arc::new(MockToolStore::with_tools(existing()));
        let handler = UpdateToolHandler::new(store.clone(), Arc::new(MockImageStorage::default()));

        let result = handler
            .handle(UpdateToolCommand {
                id: ToolId::new(1),
                payload: json!({"name": "Hi"}),
                image: None,
            })
            .await;

        assert!(matches!(result, Err(ToolError::Validation(_))));
        assert_eq!(store.snapshot(), existing());
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let store = Arc::new(MockToolStore::with_tools(existing()));
        let images = Arc::new(MockImageStorage::default());
        let handler = UpdateToolHandler::new(store.clone(), images.clone());

        let result = handler
            .handle(UpdateToolCommand {
                id: ToolId::new(99),
                payload: hammer_payload(),
                image: Some(ImageUpload {
                    file_name: Some("n.png".to_string()),
                    content_type: Some("image/png".to_string()),
                    bytes: vec![1],
                }),
            })
            .await;

        assert_eq!(result, Err(ToolError::NotFound(ToolId::new(99))));
        assert_eq!(store.snapshot(), existing());
        assert!(images.written.lock().unwrap().is_empty());
        assert!(images.removed.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn upload_is_written_for_existing_tool() {
        let store = Arc::new(MockToolStore::with_tools(existing()));
        let images = Arc::new(MockImageStorage::default());
        let handler = UpdateToolHandler::new(store.clone(), images.clone());
        let mut payload = hammer_payload();
        payload.as_object_mut().unwrap().remove("img_name");

        let tool = handler
            .handle(UpdateToolCommand {
                id: ToolId::new(1),
                payload,
                image: Some(ImageUpload {
                    file_name: Some("n.png".to_string()),
                    content_type: Some("image/png".to_string()),
                    bytes: vec![1],
                }),
            })
            .await
            .unwrap();

        assert_eq!(tool.img_name, "images/upload.png");
        assert_eq!(*images.written.lock().unwrap(), vec!["images/upload.png"]);
        assert!(images.removed.lock().unwrap().is_empty());
    }
}

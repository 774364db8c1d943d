//! Shared payload staging for the create and update handlers.

use serde_json::Value;

use crate::domain::tool::{validate_tool, ToolDraft, ToolError};
use crate::ports::ImageStorage;

/// An image file attached to a create or update request.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    fn check(&self) -> Result<(), ToolError> {
        if self.bytes.is_empty() {
            return Err(ToolError::invalid_upload("image file is empty"));
        }
        match self.content_type.as_deref() {
            Some(ct) if !ct.starts_with("image/") => Err(ToolError::invalid_upload(format!(
                "expected an image, got {}",
                ct
            ))),
            _ => Ok(()),
        }
    }
}

/// A validated draft plus the image it still has to write, if any.
///
/// Staging never touches storage, so a rejected payload leaves no trace.
#[derive(Debug)]
pub(super) struct StagedTool {
    pub draft: ToolDraft,
    image: Option<(String, Vec<u8>)>,
}

impl StagedTool {
    /// Validate `payload`, pointing `img_name` at the upload when present.
    pub fn prepare(
        images: &dyn ImageStorage,
        mut payload: Value,
        image: Option<ImageUpload>,
    ) -> Result<Self, ToolError> {
        let image = match image {
            Some(upload) => {
                upload.check()?;
                let public_path = images.allocate(upload.file_name.as_deref());
                if let Some(object) = payload.as_object_mut() {
                    object.insert("img_name".to_string(), Value::String(public_path.clone()));
                }
                Some((public_path, upload.bytes))
            }
            None => None,
        };

        let draft = validate_tool(&payload)?;
        Ok(Self { draft, image })
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    pub async fn write_image(&self, images: &dyn ImageStorage) -> Result<(), ToolError> {
        if let Some((path, bytes)) = &self.image {
            images.write(path, bytes).await?;
        }
        Ok(())
    }

    /// Best-effort removal after the store rejected the draft.
    pub async fn discard_image(&self, images: &dyn ImageStorage) {
        if let Some((path, _)) = &self.image {
            if let Err(e) = images.remove(path).await {
                tracing::warn!(path = %path, error = %e, "Failed to remove orphaned image");
            }
        }
    }
}

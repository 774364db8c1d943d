//! Request body extractor for tool writes.
//!
//! Accepts either a JSON object or a `multipart/form-data` form. Form text
//! fields become JSON strings; the `image` file part becomes an
//! [`ImageUpload`].

use axum::async_trait;
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header::CONTENT_TYPE;
use axum::Json;
use serde_json::{Map, Value};

use crate::application::ImageUpload;

use super::handlers::ToolApiError;

/// Form field carrying the uploaded image.
pub const IMAGE_FIELD: &str = "image";

/// Untrusted tool payload plus an optional uploaded image.
#[derive(Debug)]
pub struct ToolPayload {
    pub fields: Value,
    pub image: Option<ImageUpload>,
}

#[async_trait]
impl<S> FromRequest<S> for ToolPayload
where
    S: Send + Sync,
{
    type Rejection = ToolApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_multipart(&req) {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| ToolApiError::BadRequest(e.body_text()))?;
            read_form(multipart).await
        } else {
            let Json(fields) = Json::<Value>::from_request(req, state)
                .await
                .map_err(|e| ToolApiError::BadRequest(e.body_text()))?;
            Ok(Self {
                fields,
                image: None,
            })
        }
    }
}

fn is_multipart(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|ct| ct.starts_with("multipart/form-data"))
        .unwrap_or(false)
}

async fn read_form(mut multipart: Multipart) -> Result<ToolPayload, ToolApiError> {
    let mut fields = Map::new();
    let mut image = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ToolApiError::BadRequest(e.to_string()))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        if name == IMAGE_FIELD {
            let file_name = field.file_name().map(str::to_string);
            let content_type = field.content_type().map(str::to_string);
            let bytes = field
                .bytes()
                .await
                .map_err(|e| ToolApiError::BadRequest(e.to_string()))?;
            // Browsers send an empty part when no file was chosen.
            if !bytes.is_empty() || file_name.as_deref().is_some_and(|n| !n.is_empty()) {
                image = Some(ImageUpload {
                    file_name,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
        } else {
            let text = field
                .text()
                .await
                .map_err(|e| ToolApiError::BadRequest(e.to_string()))?;
            fields.insert(name, Value::String(text));
        }
    }

    Ok(ToolPayload {
        fields: Value::Object(fields),
        image,
    })
}

//! HTTP handlers for tool endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::{
    CreateToolCommand, CreateToolHandler, DeleteToolCommand, DeleteToolHandler, ListToolsHandler,
    UpdateToolCommand, UpdateToolHandler,
};
use crate::domain::tool::{ToolError, ToolId, ToolValidationError};
use crate::ports::{ImageStorage, ToolStore};

use super::dto::{ErrorResponse, ToolCommandResponse, ToolResponse};
use super::payload::ToolPayload;

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ToolHandlers {
    list_handler: Arc<ListToolsHandler>,
    create_handler: Arc<CreateToolHandler>,
    update_handler: Arc<UpdateToolHandler>,
    delete_handler: Arc<DeleteToolHandler>,
}

impl ToolHandlers {
    pub fn new(
        list_handler: Arc<ListToolsHandler>,
        create_handler: Arc<CreateToolHandler>,
        update_handler: Arc<UpdateToolHandler>,
        delete_handler: Arc<DeleteToolHandler>,
    ) -> Self {
        Self {
            list_handler,
            create_handler,
            update_handler,
            delete_handler,
        }
    }

    /// Wires every tool handler against one store and one image sink.
    pub fn from_ports(store: Arc<dyn ToolStore>, images: Arc<dyn ImageStorage>) -> Self {
        Self::new(
            Arc::new(ListToolsHandler::new(store.clone())),
            Arc::new(CreateToolHandler::new(store.clone(), images.clone())),
            Arc::new(UpdateToolHandler::new(store.clone(), images)),
            Arc::new(DeleteToolHandler::new(store)),
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/tools - List every tool
pub async fn list_tools(State(handlers): State<ToolHandlers>) -> Result<Response, ToolApiError> {
    let tools = handlers.list_handler.handle().await?;
    let response: Vec<ToolResponse> = tools.into_iter().map(Into::into).collect();
    Ok((StatusCode::OK, Json(response)).into_response())
}

/// POST /api/tools - Create a tool
pub async fn create_tool(
    State(handlers): State<ToolHandlers>,
    payload: ToolPayload,
) -> Result<Response, ToolApiError> {
    let cmd = CreateToolCommand {
        payload: payload.fields,
        image: payload.image,
    };

    let tool = handlers.create_handler.handle(cmd).await?;
    Ok((StatusCode::CREATED, Json(ToolCommandResponse::created(tool))).into_response())
}

/// PUT /api/tools/:id - Replace a tool's fields
pub async fn update_tool(
    State(handlers): State<ToolHandlers>,
    Path(tool_id): Path<String>,
    payload: ToolPayload,
) -> Result<Response, ToolApiError> {
    let cmd = UpdateToolCommand {
        id: parse_tool_id(&tool_id)?,
        payload: payload.fields,
        image: payload.image,
    };

    let tool = handlers.update_handler.handle(cmd).await?;
    Ok((StatusCode::OK, Json(ToolCommandResponse::updated(tool))).into_response())
}

/// DELETE /api/tools/:id - Remove a tool
pub async fn delete_tool(
    State(handlers): State<ToolHandlers>,
    Path(tool_id): Path<String>,
) -> Result<Response, ToolApiError> {
    let cmd = DeleteToolCommand {
        id: parse_tool_id(&tool_id)?,
    };

    handlers.delete_handler.handle(cmd).await?;
    Ok(StatusCode::OK.into_response())
}

fn parse_tool_id(raw: &str) -> Result<ToolId, ToolApiError> {
    raw.parse::<ToolId>()
        .map_err(|_| ToolApiError::BadRequest(format!("Invalid tool ID: {}", raw)))
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug)]
pub enum ToolApiError {
    BadRequest(String),
    Validation(ToolValidationError),
    NotFound(ToolId),
    Internal(String),
}

impl From<ToolError> for ToolApiError {
    fn from(error: ToolError) -> Self {
        match error {
            ToolError::Validation(err) => ToolApiError::Validation(err),
            ToolError::InvalidUpload(msg) => {
                ToolApiError::BadRequest(format!("Invalid upload: {}", msg))
            }
            ToolError::NotFound(id) => ToolApiError::NotFound(id),
            ToolError::Storage(msg) => ToolApiError::Internal(msg),
        }
    }
}

impl IntoResponse for ToolApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            ToolApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            ToolApiError::Validation(err) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::validation_failed(&err),
            ),
            ToolApiError::NotFound(id) => (
                StatusCode::NOT_FOUND,
                ErrorResponse::not_found("Tool", &id.to_string()),
            ),
            ToolApiError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::internal("An internal error occurred"),
                )
            }
        };

        (status, Json(error)).into_response()
    }
}

//! Axum router configuration for tool endpoints.

use axum::{
    routing::{get, put},
    Router,
};

use super::handlers::{create_tool, delete_tool, list_tools, update_tool, ToolHandlers};

/// Create the tools API router.
///
/// Suitable for mounting at `/api/tools`.
///
/// # Routes
///
/// - `GET /` - List every tool
/// - `POST /` - Create a tool (JSON or multipart form)
/// - `PUT /:id` - Replace a tool's fields
/// - `DELETE /:id` - Remove a tool
pub fn tool_routes(handlers: ToolHandlers) -> Router {
    Router::new()
        .route("/", get(list_tools).post(create_tool))
        .route("/:id", put(update_tool).delete(delete_tool))
        .with_state(handlers)
}

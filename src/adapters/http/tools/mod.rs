//! Tools HTTP adapter - REST API for the tool catalog.
//!
//! Provides endpoints for:
//! - Listing tools
//! - Creating tools, optionally with an uploaded image
//! - Updating and deleting tools by id

pub mod dto;
pub mod handlers;
pub mod payload;
pub mod routes;

pub use dto::{ErrorResponse, ToolCommandResponse, ToolResponse};
pub use handlers::{ToolApiError, ToolHandlers};
pub use payload::{ToolPayload, IMAGE_FIELD};
pub use routes::tool_routes;

//! HTTP adapters - REST API implementations.

pub mod app;
pub mod tools;

pub use app::{app_router, TOOLS_API_PREFIX};
pub use tools::{tool_routes, ToolHandlers};

//! Tool command and query handlers.

mod create_tool;
mod delete_tool;
mod list_tools;
mod update_tool;
mod upload;

pub use create_tool::{CreateToolCommand, CreateToolHandler};
pub use delete_tool::{DeleteToolCommand, DeleteToolHandler};
pub use list_tools::ListToolsHandler;
pub use update_tool::{UpdateToolCommand, UpdateToolHandler};
pub use upload::ImageUpload;

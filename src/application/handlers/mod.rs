//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod tool;

pub use tool::{
    CreateToolCommand, CreateToolHandler, DeleteToolCommand, DeleteToolHandler, ImageUpload,
    ListToolsHandler, UpdateToolCommand, UpdateToolHandler,
};

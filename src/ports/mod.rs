//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Storage Ports
//!
//! - `ToolStore` - CRUD persistence of the tool catalog
//! - `ImageStorage` - Uploaded tool images

mod image_storage;
mod tool_store;

pub use image_storage::{ImageStorage, ImageStorageError};
pub use tool_store::{StoreError, ToolStore};

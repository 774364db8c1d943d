//! Storage Adapters
//!
//! Filesystem implementations of the storage ports.
//!
//! ## Available Adapters
//!
//! - **JsonFileToolStore** - Tool catalog mirrored to a JSON document
//! - **LocalImageStorage** - Uploaded tool images under the public directory
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{JsonFileToolStore, LocalImageStorage};
//!
//! let store = JsonFileToolStore::open("./data/tools.json").await;
//! let images = LocalImageStorage::new("./public");
//! ```

mod json_file_tool_store;
mod local_image_storage;

pub use json_file_tool_store::JsonFileToolStore;
pub use local_image_storage::{LocalImageStorage, IMAGES_DIR};

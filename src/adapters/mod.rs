//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - REST API and static front end (axum)
//! - `postgres` - Tool catalog in a PostgreSQL table
//! - `storage` - JSON document and image files on local disk

pub mod bootstrap;
pub mod http;
pub mod postgres;
pub mod storage;

pub use bootstrap::{build_tool_handlers, connect_tool_store, BootstrapError};

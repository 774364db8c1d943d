//! PostgreSQL adapters - Database implementations for storage ports.
//!
//! - `PostgresToolStore` - Tool catalog persisted in the `tools` table

mod tool_store;

pub use tool_store::PostgresToolStore;

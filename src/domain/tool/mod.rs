//! Tool catalog domain.
//!
//! - `tool` - the `Tool` entity, its id, and the validated `ToolDraft`
//! - `validation` - field rules applied to every write
//! - `errors` - use-case error type

mod errors;
mod tool;
mod validation;

pub use errors::ToolError;
pub use tool::{Tool, ToolDraft, ToolId};
pub use validation::{
    validate_tool, FieldViolation, ToolValidationError, BRAND_MIN_LEN, DESCRIPTION_MIN_LEN,
    NAME_MIN_LEN, PRICE_MIN,
};

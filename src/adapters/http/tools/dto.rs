//! HTTP DTOs for tool endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::domain::tool::{Tool, ToolValidationError};

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// A tool as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResponse {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub brand: String,
    pub description: String,
    pub img_name: String,
}

impl From<Tool> for ToolResponse {
    fn from(tool: Tool) -> Self {
        Self {
            id: tool.id.value(),
            name: tool.name,
            price: tool.price,
            brand: tool.brand,
            description: tool.description,
            img_name: tool.img_name,
        }
    }
}

/// Response for create and update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCommandResponse {
    pub message: String,
    pub tool: ToolResponse,
}

impl ToolCommandResponse {
    pub fn created(tool: Tool) -> Self {
        Self {
            message: "Tool added successfully".to_string(),
            tool: tool.into(),
        }
    }

    pub fn updated(tool: Tool) -> Self {
        Self {
            message: "Tool updated successfully".to_string(),
            tool: tool.into(),
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    /// First violation as the message, every violation in `details`.
    pub fn validation_failed(error: &ToolValidationError) -> Self {
        Self {
            code: "VALIDATION_FAILED".to_string(),
            message: error.first().to_string(),
            details: Some(serde_json::Value::from(error.messages())),
        }
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource_type, id),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }
}

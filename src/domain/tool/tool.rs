//! Tool entity and its identifier.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier of a catalog tool.
///
/// Assigned by the store on insert and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToolId(i64);

impl ToolId {
    /// Creates a ToolId from a raw integer.
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw integer value.
    pub fn value(&self) -> i64 {
        self.0
    }

    /// Returns the id that follows this one, or `None` at `i64::MAX`.
    pub fn next(&self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ToolId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// Validated tool fields without an id.
///
/// Only [`validate_tool`](super::validate_tool) produces one from untrusted
/// input, so every draft satisfies the catalog constraints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDraft {
    pub name: String,
    pub price: f64,
    pub brand: String,
    pub description: String,
    pub img_name: String,
}

/// A stored catalog tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    pub id: ToolId,
    pub name: String,
    pub price: f64,
    pub brand: String,
    pub description: String,
    pub img_name: String,
}

impl Tool {
    /// Builds a stored tool from a draft and a freshly assigned id.
    pub fn from_draft(id: ToolId, draft: ToolDraft) -> Self {
        Self {
            id,
            name: draft.name,
            price: draft.price,
            brand: draft.brand,
            description: draft.description,
            img_name: draft.img_name,
        }
    }

    /// Replaces every field except the id.
    pub fn apply(&mut self, draft: ToolDraft) {
        self.name = draft.name;
        self.price = draft.price;
        self.brand = draft.brand;
        self.description = draft.description;
        self.img_name = draft.img_name;
    }

    /// Returns the non-id fields as a draft.
    pub fn to_draft(&self) -> ToolDraft {
        ToolDraft {
            name: self.name.clone(),
            price: self.price,
            brand: self.brand.clone(),
            description: self.description.clone(),
            img_name: self.img_name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hammer() -> ToolDraft {
        ToolDraft {
            name: "Hammer".to_string(),
            price: 9.99,
            brand: "Acme".to_string(),
            description: "Steel claw hammer".to_string(),
            img_name: "images/h.png".to_string(),
        }
    }

    #[test]
    fn tool_id_parses_from_valid_string() {
        let id: ToolId = "42".parse().unwrap();
        assert_eq!(id.value(), 42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn tool_id_rejects_non_numeric_string() {
        assert!("abc".parse::<ToolId>().is_err());
        assert!("".parse::<ToolId>().is_err());
    }

    #[test]
    fn tool_id_next_increments() {
        assert_eq!(ToolId::new(1).next(), Some(ToolId::new(2)));
    }

    #[test]
    fn tool_id_next_stops_at_max() {
        assert_eq!(ToolId::new(i64::MAX).next(), None);
    }

    #[test]
    fn tool_serializes_with_flat_id() {
        let tool = Tool::from_draft(ToolId::new(1), hammer());
        let json = serde_json::to_value(&tool).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["name"], "Hammer");
        assert_eq!(json["price"], 9.99);
        assert_eq!(json["img_name"], "images/h.png");
    }

    #[test]
    fn apply_replaces_fields_but_keeps_id() {
        let mut tool = Tool::from_draft(ToolId::new(7), hammer());
        let mut draft = hammer();
        draft.name = "Mallet".to_string();
        draft.price = 0.0;

        tool.apply(draft.clone());

        assert_eq!(tool.id, ToolId::new(7));
        assert_eq!(tool.to_draft(), draft);
    }
}

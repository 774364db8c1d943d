//! Field-level validation of incoming tool payloads.
//!
//! Request bodies arrive as untyped JSON. [`validate_tool`] is the only way
//! to turn one into a [`ToolDraft`]: it checks every rule, collects every
//! violation, and never yields a partially valid record.

use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

use super::ToolDraft;

pub const NAME_MIN_LEN: usize = 3;
pub const BRAND_MIN_LEN: usize = 2;
pub const DESCRIPTION_MIN_LEN: usize = 5;
pub const PRICE_MIN: f64 = 0.0;

const KNOWN_FIELDS: [&str; 5] = ["name", "price", "brand", "description", "img_name"];

/// Keys accepted in a payload but never copied into the draft.
const IGNORED_FIELDS: [&str; 1] = ["id"];

/// A single broken rule.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldViolation {
    #[error("\"{field}\" must be of type object")]
    NotAnObject { field: String },

    #[error("\"{field}\" is required")]
    Missing { field: String },

    #[error("\"{field}\" must be a {expected}")]
    WrongType {
        field: String,
        expected: &'static str,
    },

    #[error("\"{field}\" is not allowed to be empty")]
    Empty { field: String },

    #[error("\"{field}\" length must be at least {min} characters long")]
    TooShort { field: String, min: usize },

    #[error("\"{field}\" must be greater than or equal to {min}")]
    BelowMinimum { field: String, min: f64 },

    #[error("\"{field}\" is not allowed")]
    Unknown { field: String },
}

impl FieldViolation {
    /// Name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            FieldViolation::NotAnObject { field }
            | FieldViolation::Missing { field }
            | FieldViolation::WrongType { field, .. }
            | FieldViolation::Empty { field }
            | FieldViolation::TooShort { field, .. }
            | FieldViolation::BelowMinimum { field, .. }
            | FieldViolation::Unknown { field } => field,
        }
    }
}

/// Every violation found in one payload. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolValidationError {
    violations: Vec<FieldViolation>,
}

impl ToolValidationError {
    fn new(violations: Vec<FieldViolation>) -> Self {
        debug_assert!(!violations.is_empty());
        Self { violations }
    }

    /// The first violation, in field order.
    pub fn first(&self) -> &FieldViolation {
        &self.violations[0]
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// Human-readable message for each violation.
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for ToolValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.messages().join(". "))
    }
}

impl std::error::Error for ToolValidationError {}

/// Validates an untyped payload and returns the normalized draft.
///
/// Numeric strings are accepted for `price` (multipart forms only carry
/// text). An `id` key is ignored; any other unknown key is rejected.
pub fn validate_tool(input: &Value) -> Result<ToolDraft, ToolValidationError> {
    let Some(object) = input.as_object() else {
        return Err(ToolValidationError::new(vec![FieldViolation::NotAnObject {
            field: "value".to_string(),
        }]));
    };

    let mut violations = Vec::new();

    let name = check_string(object, "name", NAME_MIN_LEN, &mut violations);
    let price = check_price(object, &mut violations);
    let brand = check_string(object, "brand", BRAND_MIN_LEN, &mut violations);
    let description = check_string(object, "description", DESCRIPTION_MIN_LEN, &mut violations);
    let img_name = check_string(object, "img_name", 1, &mut violations);

    for key in object.keys() {
        if !KNOWN_FIELDS.contains(&key.as_str()) && !IGNORED_FIELDS.contains(&key.as_str()) {
            violations.push(FieldViolation::Unknown { field: key.clone() });
        }
    }

    match (name, price, brand, description, img_name) {
        (Some(name), Some(price), Some(brand), Some(description), Some(img_name))
            if violations.is_empty() =>
        {
            Ok(ToolDraft {
                name,
                price,
                brand,
                description,
                img_name,
            })
        }
        _ => Err(ToolValidationError::new(violations)),
    }
}

fn check_string(
    object: &Map<String, Value>,
    field: &str,
    min_len: usize,
    violations: &mut Vec<FieldViolation>,
) -> Option<String> {
    let value = match object.get(field) {
        None | Some(Value::Null) => {
            violations.push(FieldViolation::Missing {
                field: field.to_string(),
            });
            return None;
        }
        Some(Value::String(s)) => s,
        Some(_) => {
            violations.push(FieldViolation::WrongType {
                field: field.to_string(),
                expected: "string",
            });
            return None;
        }
    };

    if value.is_empty() {
        violations.push(FieldViolation::Empty {
            field: field.to_string(),
        });
        return None;
    }

    if value.chars().count() < min_len {
        violations.push(FieldViolation::TooShort {
            field: field.to_string(),
            min: min_len,
        });
        return None;
    }

    Some(value.clone())
}

fn check_price(object: &Map<String, Value>, violations: &mut Vec<FieldViolation>) -> Option<f64> {
    let field = "price";
    let price = match object.get(field) {
        None | Some(Value::Null) => {
            violations.push(FieldViolation::Missing {
                field: field.to_string(),
            });
            return None;
        }
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(_) => None,
    };

    let Some(price) = price.filter(|p| p.is_finite()) else {
        violations.push(FieldViolation::WrongType {
            field: field.to_string(),
            expected: "number",
        });
        return None;
    };

    if price < PRICE_MIN {
        violations.push(FieldViolation::BelowMinimum {
            field: field.to_string(),
            min: PRICE_MIN,
        });
        return None;
    }

    Some(price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn hammer() -> Value {
        json!({
            "name": "Hammer",
            "price": 9.99,
            "brand": "Acme",
            "description": "Steel claw hammer",
            "img_name": "images/h.png"
        })
    }

    fn with(field: &str, value: Value) -> Value {
        let mut payload = hammer();
        payload[field] = value;
        payload
    }

    #[test]
    fn valid_payload_produces_draft() {
        let draft = validate_tool(&hammer()).unwrap();
        assert_eq!(draft.name, "Hammer");
        assert_eq!(draft.price, 9.99);
        assert_eq!(draft.brand, "Acme");
        assert_eq!(draft.description, "Steel claw hammer");
        assert_eq!(draft.img_name, "images/h.png");
    }

    #[test]
    fn short_name_is_rejected() {
        let err = validate_tool(&with("name", json!("Hi"))).unwrap_err();
        assert_eq!(
            err.first(),
            &FieldViolation::TooShort {
                field: "name".to_string(),
                min: 3
            }
        );
        assert_eq!(
            err.first().to_string(),
            "\"name\" length must be at least 3 characters long"
        );
    }

    #[test]
    fn negative_price_is_rejected() {
        let err = validate_tool(&with("price", json!(-1))).unwrap_err();
        assert_eq!(err.first().field(), "price");
        assert_eq!(
            err.first().to_string(),
            "\"price\" must be greater than or equal to 0"
        );
    }

    #[test]
    fn zero_price_is_allowed() {
        let draft = validate_tool(&with("price", json!(0))).unwrap();
        assert_eq!(draft.price, 0.0);
    }

    #[test]
    fn numeric_string_price_is_converted() {
        let draft = validate_tool(&with("price", json!(" 12.50 "))).unwrap();
        assert_eq!(draft.price, 12.5);
    }

    #[test]
    fn non_numeric_price_is_rejected() {
        for bad in [json!("cheap"), json!("NaN"), json!("inf"), json!(true), json!([1])] {
            let err = validate_tool(&with("price", bad)).unwrap_err();
            assert!(matches!(
                err.first(),
                FieldViolation::WrongType { expected: "number", .. }
            ));
        }
    }

    #[test]
    fn empty_img_name_is_rejected() {
        let err = validate_tool(&with("img_name", json!(""))).unwrap_err();
        assert_eq!(
            err.first(),
            &FieldViolation::Empty {
                field: "img_name".to_string()
            }
        );
    }

    #[test]
    fn wrong_type_is_rejected() {
        let err = validate_tool(&with("brand", json!(42))).unwrap_err();
        assert_eq!(err.first().to_string(), "\"brand\" must be a string");
    }

    #[test]
    fn missing_and_null_fields_are_required() {
        let mut payload = hammer();
        payload.as_object_mut().unwrap().remove("description");
        payload["brand"] = Value::Null;

        let err = validate_tool(&payload).unwrap_err();
        let fields: Vec<&str> = err.violations().iter().map(|v| v.field()).collect();
        assert_eq!(fields, vec!["brand", "description"]);
        assert!(err
            .violations()
            .iter()
            .all(|v| matches!(v, FieldViolation::Missing { .. })));
    }

    #[test]
    fn all_violations_are_collected_in_field_order() {
        let payload = json!({
            "name": "Hi",
            "price": -5,
            "brand": "A",
            "description": "tiny",
            "img_name": ""
        });

        let err = validate_tool(&payload).unwrap_err();
        let fields: Vec<&str> = err.violations().iter().map(|v| v.field()).collect();
        assert_eq!(fields, vec!["name", "price", "brand", "description", "img_name"]);
        assert_eq!(err.messages().len(), 5);
    }

    #[test]
    fn display_joins_all_messages() {
        let payload = json!({
            "name": "Hi",
            "price": 1,
            "brand": "A",
            "description": "Long enough",
            "img_name": "x"
        });
        let err = validate_tool(&payload).unwrap_err();
        assert_eq!(
            err.to_string(),
            "\"name\" length must be at least 3 characters long. \
             \"brand\" length must be at least 2 characters long"
        );
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = validate_tool(&with("colour", json!("red"))).unwrap_err();
        assert_eq!(err.first().to_string(), "\"colour\" is not allowed");
    }

    #[test]
    fn id_field_is_ignored() {
        let draft = validate_tool(&with("id", json!(99))).unwrap();
        assert_eq!(draft.name, "Hammer");
    }

    #[test]
    fn non_object_payload_is_rejected() {
        for bad in [json!([]), json!("tool"), json!(null), json!(3)] {
            let err = validate_tool(&bad).unwrap_err();
            assert_eq!(err.violations().len(), 1);
            assert_eq!(err.first().to_string(), "\"value\" must be of type object");
        }
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // Two characters, four bytes.
        let err = validate_tool(&with("name", json!("éé"))).unwrap_err();
        assert_eq!(err.first().field(), "name");

        let draft = validate_tool(&with("brand", json!("éé"))).unwrap();
        assert_eq!(draft.brand, "éé");
    }

    proptest! {
        #[test]
        fn valid_fields_round_trip_unchanged(
            name in "[a-zA-Z ]{3,30}",
            price in 0.0f64..100_000.0,
            brand in "[a-zA-Z]{2,20}",
            description in "[a-zA-Z ]{5,80}",
            img_name in "images/[a-z]{1,12}\\.png",
        ) {
            let payload = json!({
                "name": name,
                "price": price,
                "brand": brand,
                "description": description,
                "img_name": img_name,
            });

            let draft = validate_tool(&payload).unwrap();
            prop_assert_eq!(draft.name, name);
            prop_assert_eq!(draft.price, price);
            prop_assert_eq!(draft.brand, brand);
            prop_assert_eq!(draft.description, description);
            prop_assert_eq!(draft.img_name, img_name);
        }

        #[test]
        fn short_names_never_validate(name in "[a-zA-Z]{1,2}") {
            prop_assert!(validate_tool(&with("name", json!(name))).is_err());
        }

        #[test]
        fn negative_prices_never_validate(price in -100_000.0f64..-0.001) {
            let err = validate_tool(&with("price", json!(price))).unwrap_err();
            prop_assert_eq!(err.first().field(), "price");
        }
    }
}

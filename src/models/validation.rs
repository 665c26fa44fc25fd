use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{ValidationError, ValidationResult};

/// Raw numeric payload field. Clients send numbers both as JSON numbers and
/// as quoted strings, so request models keep the raw form and coercion
/// happens during validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    Number(f64),
    Text(String),
    Other(Value),
}

impl NumericInput {
    fn display_value(&self) -> String {
        match self {
            NumericInput::Number(n) => n.to_string(),
            NumericInput::Text(s) => format!("\"{}\"", s),
            NumericInput::Other(value) => value.to_string(),
        }
    }
}

fn invalid_number(field: &str, input: &NumericInput) -> ValidationError {
    ValidationError::InvalidNumber {
        field: field.to_string(),
        value: input.display_value(),
    }
}

/// Presence check for required request fields
pub fn require<T>(field: &str, value: Option<T>) -> ValidationResult<T> {
    value.ok_or_else(|| ValidationError::RequiredField {
        field: field.to_string(),
    })
}

/// Presence check for required text fields. Empty strings count as missing.
pub fn require_text(field: &str, value: Option<String>) -> ValidationResult<String> {
    match value {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(ValidationError::RequiredField {
            field: field.to_string(),
        }),
    }
}

/// Coerce a raw numeric field to a decimal amount. Accepts a JSON number or
/// a string that parses entirely as a number; everything else is rejected.
pub fn coerce_decimal(field: &str, input: &NumericInput) -> ValidationResult<Decimal> {
    match input {
        NumericInput::Number(n) => {
            Decimal::from_f64(*n).ok_or_else(|| invalid_number(field, input))
        }
        NumericInput::Text(text) => text
            .trim()
            .parse::<Decimal>()
            .map_err(|_| invalid_number(field, input)),
        NumericInput::Other(_) => Err(invalid_number(field, input)),
    }
}

/// Coerce a raw numeric field to an integer, truncating any fractional part.
pub fn coerce_integer(field: &str, input: &NumericInput) -> ValidationResult<i64> {
    match input {
        NumericInput::Number(n) => Ok(n.trunc() as i64),
        NumericInput::Text(text) => {
            let trimmed = text.trim();
            if let Ok(value) = trimmed.parse::<i64>() {
                Ok(value)
            } else {
                match trimmed.parse::<f64>() {
                    Ok(value) if value.is_finite() => Ok(value.trunc() as i64),
                    _ => Err(invalid_number(field, input)),
                }
            }
        }
        NumericInput::Other(_) => Err(invalid_number(field, input)),
    }
}

/// Coerce an optional integer field, falling back to a default when absent
pub fn optional_integer(
    field: &str,
    input: Option<NumericInput>,
    default: i64,
) -> ValidationResult<i64> {
    match input {
        Some(raw) => coerce_integer(field, &raw),
        None => Ok(default),
    }
}

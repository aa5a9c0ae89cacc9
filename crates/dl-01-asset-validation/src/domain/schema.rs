//! # Schema Validator
//!
//! Structural, type and range checks on a submitted dapp payload. Pure
//! function of the payload; no ledger access.
//!
//! Fields are checked in a fixed order and the first failure wins:
//! `category`, `name`, `description`, `icon`, `link`, `tags`, `type`.
//!
//! An explicit `null` for an optional field is treated as absent. Lengths are
//! counted in characters. Unknown properties are ignored.

use super::errors::{JsonType, SchemaError};
use crate::config::{IntegerBounds, LengthBounds, ValidationPolicy};
use serde_json::{Map, Value};
use shared_types::DappAsset;

/// Validates a raw payload and produces the typed asset.
pub fn validate_schema(raw: &Value, policy: &ValidationPolicy) -> Result<DappAsset, SchemaError> {
    let object = raw.as_object().ok_or(SchemaError::TypeMismatch {
        field: "dapp",
        expected: JsonType::Object,
        found: JsonType::of(raw),
    })?;

    let category = required_integer(object, "category", policy.category)?;
    let name = required_string(object, "name", policy.name_length)?;
    let description = optional_string(
        object,
        "description",
        LengthBounds::up_to(policy.description_max_length),
    )?;
    let icon = optional_string(object, "icon", LengthBounds::unbounded())?;
    let link = required_string(object, "link", LengthBounds::unbounded())?;
    let tags = optional_string(object, "tags", LengthBounds::up_to(policy.tags_max_length))?;
    let dapp_type = required_integer(object, "type", policy.dapp_type)?;

    Ok(DappAsset {
        name,
        description,
        tags,
        dapp_type,
        category,
        link,
        icon,
    })
}

fn required<'a>(object: &'a Map<String, Value>, field: &'static str) -> Result<&'a Value, SchemaError> {
    object.get(field).ok_or(SchemaError::MissingField { field })
}

fn required_integer(
    object: &Map<String, Value>,
    field: &'static str,
    bounds: IntegerBounds,
) -> Result<u8, SchemaError> {
    integer(required(object, field)?, field, bounds)
}

fn required_string(
    object: &Map<String, Value>,
    field: &'static str,
    bounds: LengthBounds,
) -> Result<String, SchemaError> {
    string(required(object, field)?, field, bounds)
}

fn optional_string(
    object: &Map<String, Value>,
    field: &'static str,
    bounds: LengthBounds,
) -> Result<Option<String>, SchemaError> {
    match object.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => string(value, field, bounds).map(Some),
    }
}

fn integer(value: &Value, field: &'static str, bounds: IntegerBounds) -> Result<u8, SchemaError> {
    let number = match value {
        Value::Number(n) => n
            .as_i64()
            .map(i128::from)
            .or_else(|| n.as_u64().map(i128::from)),
        _ => None,
    }
    .ok_or(SchemaError::TypeMismatch {
        field,
        expected: JsonType::Integer,
        found: JsonType::of(value),
    })?;

    if number < i128::from(bounds.min) {
        return Err(SchemaError::BelowMinimum {
            field,
            value: number,
            minimum: bounds.min,
        });
    }
    if number > i128::from(bounds.max) {
        return Err(SchemaError::AboveMaximum {
            field,
            value: number,
            maximum: bounds.max,
        });
    }

    u8::try_from(number).map_err(|_| SchemaError::AboveMaximum {
        field,
        value: number,
        maximum: i64::from(u8::MAX),
    })
}

fn string(value: &Value, field: &'static str, bounds: LengthBounds) -> Result<String, SchemaError> {
    let Value::String(s) = value else {
        return Err(SchemaError::TypeMismatch {
            field,
            expected: JsonType::String,
            found: JsonType::of(value),
        });
    };

    let length = s.chars().count();
    if length < bounds.min {
        return Err(SchemaError::TooShort {
            field,
            length,
            minimum: bounds.min,
        });
    }
    if length > bounds.max {
        return Err(SchemaError::TooLong {
            field,
            length,
            maximum: bounds.max,
        });
    }
    Ok(s.clone())
}

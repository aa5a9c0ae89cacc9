//! Asset validation error types.
//!
//! Two families: `SchemaError` for structural problems with the payload and
//! `RuleError` for semantic problems. Both are normal, recoverable outcomes
//! returned to the submitter.

use shared_types::{Address, Amount};
use std::fmt;
use thiserror::Error;

/// JSON value kinds, named as in JSON-schema.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JsonType {
    Integer,
    Number,
    String,
    Boolean,
    Null,
    Array,
    Object,
}

impl JsonType {
    pub fn of(value: &serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Number(n) if n.is_i64() || n.is_u64() => Self::Integer,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }
}

impl fmt::Display for JsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Integer => "integer",
            Self::Number => "number",
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Null => "null",
            Self::Array => "array",
            Self::Object => "object",
        };
        f.write_str(name)
    }
}

/// Structural payload errors. Each names the offending field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("missing required property: {field}")]
    MissingField { field: &'static str },

    #[error("{field}: expected type {expected} but found type {found}")]
    TypeMismatch {
        field: &'static str,
        expected: JsonType,
        found: JsonType,
    },

    #[error("{field}: value {value} is less than minimum {minimum}")]
    BelowMinimum {
        field: &'static str,
        value: i128,
        minimum: i64,
    },

    #[error("{field}: value {value} is greater than maximum {maximum}")]
    AboveMaximum {
        field: &'static str,
        value: i128,
        maximum: i64,
    },

    #[error("{field}: string is too short ({length} chars), minimum {minimum}")]
    TooShort {
        field: &'static str,
        length: usize,
        minimum: usize,
    },

    #[error("{field}: string is too long ({length} chars), maximum {maximum}")]
    TooLong {
        field: &'static str,
        length: usize,
        maximum: usize,
    },
}

impl SchemaError {
    /// The payload field this error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingField { field }
            | Self::TypeMismatch { field, .. }
            | Self::BelowMinimum { field, .. }
            | Self::AboveMaximum { field, .. }
            | Self::TooShort { field, .. }
            | Self::TooLong { field, .. } => field,
        }
    }
}

/// Semantic (business-rule) errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("invalid application type")]
    UnsupportedType { value: u8 },

    #[error("invalid application link")]
    InvalidLink { link: String },

    #[error("invalid application file type")]
    InvalidLinkFileType { link: String },

    #[error("invalid application icon link")]
    InvalidIconLink { icon: String },

    #[error("invalid application icon file type")]
    InvalidIconFileType { icon: String },

    #[error("encountered duplicate tag: {tag} in application")]
    DuplicateTag { tag: String },

    #[error("invalid transaction fee: expected {expected}, got {actual}")]
    InvalidFee { expected: Amount, actual: Amount },

    #[error("application name already exists: {name}")]
    NameExists { name: String },

    #[error("application link already exists: {link}")]
    LinkExists { link: String },

    #[error("account does not have enough funds: {address} balance: {balance}")]
    InsufficientFunds { address: Address, balance: Amount },
}

impl RuleError {
    /// Returns true for collisions with confirmed registry entries.
    pub fn is_collision(&self) -> bool {
        matches!(self, Self::NameExists { .. } | Self::LinkExists { .. })
    }
}

/// Any reason a transaction fails admission-time validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdmissionError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Rule(#[from] RuleError),
}

/// Inconsistent validation configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    #[error("{field}: minimum exceeds maximum")]
    InvertedBounds { field: &'static str },

    #[error("{field}: bounds must fit in 0..=255")]
    OutOfRange { field: &'static str },

    #[error("{name} must not be empty")]
    EmptyWhitelist { name: &'static str },
}

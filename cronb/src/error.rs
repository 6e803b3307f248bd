//! Error types for cronb operations.

use crate::field::Field;

/// Which side of a `lo-hi` range fell outside the field's domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeSide {
    Low,
    High,
    Both,
}

impl std::fmt::Display for RangeSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RangeSide::Low => write!(f, "bottom"),
            RangeSide::High => write!(f, "top"),
            RangeSide::Both => write!(f, "bottom and top"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown field \"{name}\"; valid fields are: {valid}")]
    UnknownField { name: String, valid: String },

    #[error("Illegal character in \"{value}\" for {field}; only digits 0-9, \"-\" and \"*\" are allowed")]
    IllegalCharacter { field: Field, value: String },

    #[error("Malformed value \"{value}\" for {field}; expected \"*\", a number or a range")]
    MalformedValue { field: Field, value: String },

    #[error("Malformed range \"{value}\" for {field}; expected \"lo-hi\" with lo <= hi")]
    RangeMalformed { field: Field, value: String },

    #[error("Range \"{value}\" is out of bounds for {field}: {side} of range must lie within {min}-{max}")]
    RangeOutOfBounds {
        field: Field,
        value: String,
        side: RangeSide,
        min: u32,
        max: u32,
    },

    #[error("Value \"{value}\" is out of bounds for {field}; limits are {min}-{max}")]
    ValueOutOfBounds {
        field: Field,
        value: String,
        min: u32,
        max: u32,
    },

    #[error("Invalid cron expression; limited to {max} fields, got {given}")]
    TooManyFields { given: usize, max: usize },

    #[error("Values for \"{0}\" must be an array of field values")]
    NotASequence(String),

    #[error("Wildcard \"*\" cannot be combined with other values for {field}")]
    WildcardMixed { field: Field },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;

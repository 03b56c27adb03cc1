//! Decoding errors.
//!
//! Numeric operations never fail; degenerate results surface as `inf`/`NaN`
//! and are detected with the `is_nan`/`is_infinite` predicates. The only
//! fallible surface of the crate is turning text or JSON back into vectors.

use std::fmt;

/// Error type for vector text and JSON decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VectorParseError {
    /// The text is not of the form `VecN(c1, c2, ...)`.
    InvalidFormat,
    /// The text names the right type but carries the wrong component count.
    WrongArity { expected: usize, found: usize },
    /// A component could not be read as a number.
    InvalidComponent(String),
    /// The JSON document does not match the plain-object shape.
    Json(String),
}

impl fmt::Display for VectorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VectorParseError::InvalidFormat => write!(f, "invalid vector format"),
            VectorParseError::WrongArity { expected, found } => {
                write!(f, "expected {} components, found {}", expected, found)
            }
            VectorParseError::InvalidComponent(c) => write!(f, "invalid component: {:?}", c),
            VectorParseError::Json(msg) => write!(f, "invalid vector JSON: {}", msg),
        }
    }
}

impl std::error::Error for VectorParseError {}

impl From<serde_json::Error> for VectorParseError {
    fn from(e: serde_json::Error) -> Self {
        VectorParseError::Json(e.to_string())
    }
}

//! Error types for the flowexport engine.

use thiserror::Error;

/// All possible errors from the flowexport engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    // Record validation errors
    #[error("wrong number of values: template has {expected} fields, got {actual}")]
    Arity { expected: usize, actual: usize },

    #[error("cannot encode {kind} value into a {size}-byte field")]
    UnsupportedValue { kind: String, size: u16 },

    #[error("string of {length} bytes does not fit a {size}-byte field")]
    StringTooLong { length: usize, size: u16 },

    #[error("invalid IPv4 address: {0:?}")]
    AddressFormat(String),

    // Layout errors
    #[error("field {element_id} declares a zero size")]
    ZeroFieldSize { element_id: u16 },

    #[error("{what} of {length} does not fit in 16 bits")]
    LengthOverflow { what: &'static str, length: usize },
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;

//! ABI codec errors

use thiserror::Error;

/// ABI encoding/decoding error
///
/// All conditions are detected synchronously before any payload bytes are
/// returned; a failed encode never yields a partial payload.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AbiError {
    /// Malformed or unknown type descriptor
    #[error("invalid descriptor: {0}")]
    InvalidDescriptor(String),

    /// Value count does not match parameter count
    #[error("arity mismatch: expected {expected} values, got {got}")]
    ArityMismatch {
        /// Number of declared parameters
        expected: usize,
        /// Number of supplied values
        got: usize,
    },

    /// Numeric value cannot fit the declared bit width
    #[error("value out of range for {ty}: {value}")]
    ValueOutOfRange {
        /// Canonical name of the declared type
        ty: String,
        /// Decimal rendering of the offending value
        value: String,
    },

    /// Value shape incompatible with the declared type
    #[error("type mismatch: expected {expected}, got {got}")]
    TypeMismatch {
        /// Canonical name of the declared type
        expected: String,
        /// Kind of the supplied value
        got: String,
    },

    /// Truncated or malformed encoded data
    #[error("invalid data: {0}")]
    InvalidData(String),

    /// No function with the given name is registered
    #[error("unknown function: {0}")]
    UnknownFunction(String),
}

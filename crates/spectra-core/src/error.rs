//! Error types for spectrum data handling
//!
//! Provides a unified error type for all spectra crates.

use thiserror::Error;

/// Core error type for scale, resampling and spectrum operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A coordinate grid could not be constructed from the given parameters
    #[error("Invalid scale: {0}")]
    InvalidScale(String),

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Arrays that must line up do not have matching lengths
    #[error("Size mismatch in {context}: expected {expected}, got {actual}")]
    SizeMismatch {
        expected: usize,
        actual: usize,
        context: String,
    },

    /// Scalar division by exactly zero
    #[error("Division by zero")]
    DivisionByZero,

    /// An entry lacks an attribute the operation depends on
    #[error("Missing attribute '{name}' on entry {index}")]
    MissingAttribute { name: String, index: usize },

    /// Index outside the bounds of a collection
    #[error("Index {index} out of range for {len} entries")]
    IndexOutOfRange { index: usize, len: usize },

    /// An operation would produce a grid with no points
    #[error("Empty scale: {0}")]
    EmptyScale(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for an invalid grid configuration
    pub fn invalid_scale(reason: impl Into<String>) -> Self {
        Self::InvalidScale(reason.into())
    }

    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::SizeMismatch {
            expected,
            actual,
            context: context.to_string(),
        }
    }

    /// Create an error for NaN/Inf bounds
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidScale(format!("{context} contains NaN or infinite values"))
    }

    /// Create an error for an attribute missing from entry `index`
    pub fn missing_attribute(name: &str, index: usize) -> Self {
        Self::MissingAttribute {
            name: name.to_string(),
            index,
        }
    }
}

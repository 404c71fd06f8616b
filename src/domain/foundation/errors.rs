//! Error types for the domain layer.

use thiserror::Error;

/// Errors that occur during domain record construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("port {field} can't be empty")]
    EmptyField { field: &'static str },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: &'static str) -> Self {
        ValidationError::EmptyField { field }
    }

    /// Name of the field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::EmptyField { field } => field,
        }
    }
}

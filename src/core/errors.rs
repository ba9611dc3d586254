//! Error types for the credit book and the input validator.
//!
//! The `Display` text of each variant is exactly what the session prints.

use super::models::UnknownGrade;
use thiserror::Error;

/// Failures raised by the credit book. Each carries the offending name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A student with this name is already registered.
    #[error("{0} already exists. Not added.")]
    DuplicateStudent(String),

    /// No student with this name is registered.
    #[error("Student {0} not found.")]
    StudentNotFound(String),

    /// The student exists but has no grade for this subject.
    #[error("Subject {0} not found.")]
    SubjectNotFound(String),

    /// The student exists but has no grades at all.
    #[error("No grades found for student {0}.")]
    CreditsNotFound(String),
}

/// Failures raised while validating a raw input line.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// Wrong token count, a malformed token, or no line at all.
    #[error("Invalid input. Please check and try again.")]
    InvalidInput,
}

impl From<UnknownGrade> for InputError {
    fn from(_: UnknownGrade) -> Self {
        Self::InvalidInput
    }
}

/// Anything a single menu action can fail with.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The argument line did not validate.
    #[error(transparent)]
    Input(#[from] InputError),

    /// The credit book rejected the request.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result type for credit book operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

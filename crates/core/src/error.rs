//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every failure the invoicing and statistics crates can produce is one of
/// these variants. They are deterministic and carry enough context to be
/// reported to the caller as-is.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An invoice amount failed validation (type, sign, range or maximum value).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A value that is not an invoice was offered to the statistics collection.
    #[error("cannot pass type {found} into invoice stats")]
    TypeMismatch { found: String },

    /// The statistics collection already holds its configured maximum.
    #[error(
        "invoice stats has reached maximum number of stored invoices: {max}; \
         use clear() to reduce memory load"
    )]
    CapacityExceeded { max: usize },

    /// A statistic was requested over an empty data set.
    #[error("{0} requires at least one data point")]
    EmptyData(&'static str),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn type_mismatch(found: impl Into<String>) -> Self {
        Self::TypeMismatch {
            found: found.into(),
        }
    }

    pub fn capacity_exceeded(max: usize) -> Self {
        Self::CapacityExceeded { max }
    }

    pub fn empty_data(statistic: &'static str) -> Self {
        Self::EmptyData(statistic)
    }
}

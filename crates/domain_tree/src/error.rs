//! Service-layer error types

use core_kernel::StoreError;
use thiserror::Error;

/// Error type for the domain services.
///
/// Argument and validation failures are raised synchronously before any
/// store access. Absence of a record is never an error; reads return
/// `Ok(None)` or an empty collection instead. Store failures (including
/// commit failures) pass through unchanged.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A required argument was missing or malformed
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A numeric argument was outside its allowed range
    #[error("Out of range: {0}")]
    OutOfRange(String),

    /// Settings could not be loaded
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A store-layer failure, propagated unchanged
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ServiceError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        ServiceError::InvalidArgument(message.into())
    }

    pub fn out_of_range(message: impl Into<String>) -> Self {
        ServiceError::OutOfRange(message.into())
    }

    /// Returns true for argument and range failures raised before store access
    pub fn is_argument_error(&self) -> bool {
        matches!(
            self,
            ServiceError::InvalidArgument(_) | ServiceError::OutOfRange(_)
        )
    }

    /// Returns true if the error came from the store layer
    pub fn is_store_error(&self) -> bool {
        matches!(self, ServiceError::Store(_))
    }
}

impl From<config::ConfigError> for ServiceError {
    fn from(error: config::ConfigError) -> Self {
        ServiceError::Configuration(error.to_string())
    }
}

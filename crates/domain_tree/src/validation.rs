//! Entity validation rules
//!
//! Field-shape rules (lengths, required text) come from `validator`
//! derives on the entities; cross-field rules are written by hand in each
//! entity's `DomainEntity::validate`. Both funnel into a
//! [`ValidationResult`], which the service layer converts into an
//! invalid-argument error before any store access happens.

use crate::error::ServiceError;

/// Outcome of validating an entity before a write.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    /// Fatal problems; any entry fails the write
    pub errors: Vec<String>,
    /// Non-fatal issues worth surfacing to the caller
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Creates a passing result
    pub fn ok() -> Self {
        Self::default()
    }

    /// Creates a failed result with errors
    pub fn fail(errors: Vec<String>) -> Self {
        Self {
            errors,
            warnings: Vec::new(),
        }
    }

    /// Converts a `validator` derive outcome
    pub fn from_validator(outcome: Result<(), validator::ValidationErrors>) -> Self {
        match outcome {
            Ok(()) => Self::ok(),
            Err(errors) => Self::fail(vec![errors.to_string()]),
        }
    }

    /// Returns true if no errors were recorded
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Adds an error to the result
    pub fn add_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
    }

    /// Adds a warning to the result
    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }

    /// Merges another validation result into this one
    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    /// Fails with an invalid-argument error if any error was recorded
    pub fn into_result(self) -> Result<(), ServiceError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(ServiceError::invalid_argument(self.errors.join("; ")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_result_passes() {
        assert!(ValidationResult::ok().into_result().is_ok());
    }

    #[test]
    fn test_errors_fail_the_write() {
        let mut result = ValidationResult::ok();
        result.add_error("name is required");
        result.add_error("text too long");
        let error = result.into_result().unwrap_err();
        assert!(error.is_argument_error());
        assert!(error.to_string().contains("name is required"));
        assert!(error.to_string().contains("text too long"));
    }

    #[test]
    fn test_warnings_do_not_fail() {
        let mut result = ValidationResult::ok();
        result.add_warning("citation has no source");
        assert!(result.is_valid());
        assert!(result.into_result().is_ok());
    }

    #[test]
    fn test_merge_combines_both_lists() {
        let mut left = ValidationResult::ok();
        left.add_warning("w1");
        let mut right = ValidationResult::ok();
        right.add_error("e1");
        left.merge(right);
        assert!(!left.is_valid());
        assert_eq!(left.warnings.len(), 1);
    }
}

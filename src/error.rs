//! Error types.
//!
//! Only malformed input is an error. An instance with no feasible timetable
//! is a normal outcome and is reported as
//! [`SolveOutcome::Unsolved`](crate::solver::SolveOutcome::Unsolved).

use thiserror::Error;

use crate::validation::{ValidationError, ValidationErrorKind};

/// Result type for fallible u-exam operations.
pub type Result<T> = std::result::Result<T, SchedulerError>;

/// Errors raised before any search starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchedulerError {
    /// The problem definition is malformed. Carries every detected issue.
    #[error("invalid input: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),
}

impl SchedulerError {
    /// Creates an `InvalidInput` error holding a single issue.
    pub fn invalid(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        SchedulerError::InvalidInput(vec![ValidationError::new(kind, message)])
    }

    /// The individual validation issues behind this error.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            SchedulerError::InvalidInput(errors) => errors,
        }
    }
}

impl From<Vec<ValidationError>> for SchedulerError {
    fn from(errors: Vec<ValidationError>) -> Self {
        SchedulerError::InvalidInput(errors)
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_joins_messages() {
        let err = SchedulerError::from(vec![
            ValidationError::new(ValidationErrorKind::NoDays, "no days"),
            ValidationError::new(ValidationErrorKind::SubjectOutOfRange, "subject 9"),
        ]);
        assert_eq!(err.to_string(), "invalid input: no days; subject 9");
        assert_eq!(err.validation_errors().len(), 2);
    }

    #[test]
    fn test_invalid_single() {
        let err = SchedulerError::invalid(ValidationErrorKind::NoDays, "zero days");
        assert_eq!(err.validation_errors()[0].kind, ValidationErrorKind::NoDays);
    }
}

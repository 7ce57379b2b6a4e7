//! Input validation and solution verification.
//!
//! [`validate_problem`] checks a problem definition before any graph is
//! built or search is started. Detects:
//! - An empty day domain
//! - Enrollments referencing subjects outside `0..num_subjects`
//!
//! [`verify_assignment`] checks a finished assignment against the
//! enrollment, independently of the solver that produced it.

use crate::models::{Assignment, Day, Enrollment, ExamProblem, StudentId, SubjectId};
use std::collections::BTreeMap;
use thiserror::Error;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// `num_days` is zero.
    NoDays,
    /// A student is enrolled in a subject id `>= num_subjects`.
    SubjectOutOfRange,
}

impl ValidationError {
    /// Creates a validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a problem definition.
///
/// Checks:
/// 1. At least one day is available
/// 2. Every enrolled subject id is below `num_subjects`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_problem(problem: &ExamProblem) -> ValidationResult {
    let mut errors = Vec::new();

    if problem.num_days == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoDays,
            "Number of days must be positive",
        ));
    }

    for (student, subjects) in problem.enrollment.iter() {
        for &subject in subjects.range(problem.num_subjects..) {
            errors.push(ValidationError::new(
                ValidationErrorKind::SubjectOutOfRange,
                format!(
                    "Student {student} is enrolled in subject {subject}, \
                     but only subjects 0..{} exist",
                    problem.num_subjects
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// A student-level defect in an assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Type of violation.
    pub violation_type: ViolationType,
    /// Affected student.
    pub student: StudentId,
    /// Subjects involved, ascending.
    pub subjects: Vec<SubjectId>,
    /// Shared day for [`ViolationType::SameDay`]; `None` otherwise.
    pub day: Option<Day>,
}

/// Classification of assignment violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationType {
    /// Two or more of the student's exams fall on the same day.
    SameDay,
    /// Some of the student's exams have no day.
    Unscheduled,
}

/// Checks that no student sits two exams on one day and that every exam
/// a student takes has a day.
///
/// Returns an empty vector for a valid timetable. Violations are ordered
/// by student, then day.
pub fn verify_assignment(enrollment: &Enrollment, assignment: &Assignment) -> Vec<Violation> {
    let mut violations = Vec::new();

    for (student, subjects) in enrollment.iter() {
        let mut by_day: BTreeMap<Day, Vec<SubjectId>> = BTreeMap::new();
        let mut unscheduled = Vec::new();

        for &subject in subjects {
            match assignment.day_of(subject) {
                Some(day) => by_day.entry(day).or_default().push(subject),
                None => unscheduled.push(subject),
            }
        }

        for (day, same_day) in by_day {
            if same_day.len() > 1 {
                violations.push(Violation {
                    violation_type: ViolationType::SameDay,
                    student,
                    subjects: same_day,
                    day: Some(day),
                });
            }
        }

        if !unscheduled.is_empty() {
            violations.push(Violation {
                violation_type: ViolationType::Unscheduled,
                student,
                subjects: unscheduled,
                day: None,
            });
        }
    }

    violations
}

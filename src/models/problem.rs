//! Problem instance model.

use serde::{Deserialize, Serialize};

use super::{Day, Enrollment};

/// Input container for exam timetabling.
///
/// # Example
/// ```
/// use u_exam::models::{Enrollment, ExamProblem};
///
/// let problem = ExamProblem::new(3, 2)
///     .with_enrollment(Enrollment::new().with_student(0, [0, 1]));
/// assert_eq!(problem.days().count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamProblem {
    /// Number of subjects; subject ids are `0..num_subjects`.
    pub num_subjects: usize,
    /// Number of exam days; day ids are `0..num_days`.
    pub num_days: usize,
    /// Who sits which exam.
    #[serde(default)]
    pub enrollment: Enrollment,
}

impl ExamProblem {
    /// Creates a problem with no students.
    pub fn new(num_subjects: usize, num_days: usize) -> Self {
        Self {
            num_subjects,
            num_days,
            enrollment: Enrollment::new(),
        }
    }

    /// Sets the enrollment.
    pub fn with_enrollment(mut self, enrollment: Enrollment) -> Self {
        self.enrollment = enrollment;
        self
    }

    /// Sets the number of days.
    pub fn with_days(mut self, num_days: usize) -> Self {
        self.num_days = num_days;
        self
    }

    /// Day domain `0..num_days`.
    pub fn days(&self) -> std::ops::Range<Day> {
        0..self.num_days
    }
}

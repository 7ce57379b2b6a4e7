//! Random enrollment generation.
//!
//! Produces synthetic instances for experiments and tests: every student
//! draws a fixed number of distinct subjects uniformly at random. Seed the
//! RNG to reproduce an instance exactly.
//!
//! # Example
//! ```
//! use rand::{rngs::StdRng, SeedableRng};
//! use u_exam::generator::EnrollmentGenerator;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let enrollment = EnrollmentGenerator::new(70, 45).generate(&mut rng);
//! assert_eq!(enrollment.student_count(), 70);
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::models::{Enrollment, ExamProblem, SubjectId};

/// Subjects drawn per student unless configured otherwise.
pub const DEFAULT_SUBJECTS_PER_STUDENT: usize = 3;

/// Parameters for random enrollment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentGenerator {
    /// Number of students (ids `0..num_students`).
    pub num_students: usize,
    /// Number of subjects to draw from.
    pub num_subjects: usize,
    /// Distinct subjects per student; clamped to `num_subjects`.
    pub subjects_per_student: usize,
}

impl EnrollmentGenerator {
    /// Creates a generator drawing [`DEFAULT_SUBJECTS_PER_STUDENT`] subjects each.
    pub fn new(num_students: usize, num_subjects: usize) -> Self {
        Self {
            num_students,
            num_subjects,
            subjects_per_student: DEFAULT_SUBJECTS_PER_STUDENT,
        }
    }

    /// Sets the number of subjects per student.
    pub fn with_subjects_per_student(mut self, count: usize) -> Self {
        self.subjects_per_student = count;
        self
    }

    /// Draws an enrollment.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Enrollment {
        let per_student = self.subjects_per_student.min(self.num_subjects);
        (0..self.num_students)
            .map(|student| {
                let subjects: BTreeSet<SubjectId> =
                    rand::seq::index::sample(&mut *rng, self.num_subjects, per_student)
                        .into_iter()
                        .collect();
                (student, subjects)
            })
            .collect()
    }

    /// Draws an enrollment and wraps it in a problem with `num_days` days.
    pub fn problem<R: Rng + ?Sized>(&self, num_days: usize, rng: &mut R) -> ExamProblem {
        ExamProblem::new(self.num_subjects, num_days).with_enrollment(self.generate(rng))
    }
}

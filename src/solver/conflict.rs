//! Per-student conflict checking.
//!
//! A trial `(subject, day)` is rejected when some student enrolled in
//! `subject` already sits another exam on `day`. Every offending
//! `(student, other subject)` pair is reported, so a single edge of the
//! conflict graph may show up several times (once per shared student).
//!
//! # Complexity
//! O(s × k) per check, where s = students in the subject and k = subjects
//! per student. This is the dominant cost of the search: it runs once per
//! trial, and MRV/LCV scoring run it again for every candidate day.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{Assignment, Day, Enrollment, StudentId, SubjectId};

/// A student who would sit `subject` on the same day as the trial subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Conflict {
    /// Affected student.
    pub student: StudentId,
    /// The student's already-scheduled subject on the trial day.
    pub subject: SubjectId,
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(student {}, subject {})", self.student, self.subject)
    }
}

/// Student rosters indexed for fast trial checks.
#[derive(Debug, Clone)]
pub struct ConflictChecker {
    /// Dense student table: id and enrolled subjects (ascending).
    students: Vec<(StudentId, Vec<SubjectId>)>,
    /// subject → indices into `students`.
    rosters: Vec<Vec<usize>>,
}

impl ConflictChecker {
    /// Indexes `enrollment` for `num_subjects` subjects.
    ///
    /// Subjects outside `0..num_subjects` are expected to have been
    /// rejected by validation; they are never reported as conflicts.
    pub fn new(enrollment: &Enrollment, num_subjects: usize) -> Self {
        let mut students = Vec::with_capacity(enrollment.student_count());
        let mut rosters = vec![Vec::new(); num_subjects];

        for (idx, (student, subjects)) in enrollment.iter().enumerate() {
            for &subject in subjects.range(..num_subjects) {
                rosters[subject].push(idx);
            }
            students.push((student, subjects.range(..num_subjects).copied().collect()));
        }

        Self { students, rosters }
    }

    /// Every `(student, other subject)` pair that placing `subject` on
    /// `day` would put on the same day, ordered by student then subject.
    ///
    /// Empty means the trial is valid.
    pub fn conflicts(
        &self,
        assignment: &Assignment,
        subject: SubjectId,
        day: Day,
    ) -> Vec<Conflict> {
        let mut found = Vec::new();
        for &idx in self.roster(subject) {
            let (student, subjects) = &self.students[idx];
            for &other in subjects {
                if other != subject && assignment.day_of(other) == Some(day) {
                    found.push(Conflict {
                        student: *student,
                        subject: other,
                    });
                }
            }
        }
        found
    }

    /// Whether placing `subject` on `day` conflicts with anything.
    ///
    /// Same answer as `!conflicts(..).is_empty()`, without collecting.
    pub fn has_conflict(&self, assignment: &Assignment, subject: SubjectId, day: Day) -> bool {
        self.roster(subject).iter().any(|&idx| {
            self.students[idx]
                .1
                .iter()
                .any(|&other| other != subject && assignment.day_of(other) == Some(day))
        })
    }

    /// Number of days in `0..num_days` on which `subject` fits right now.
    pub fn valid_day_count(
        &self,
        assignment: &Assignment,
        subject: SubjectId,
        num_days: usize,
    ) -> usize {
        (0..num_days)
            .filter(|&day| !self.has_conflict(assignment, subject, day))
            .count()
    }

    fn roster(&self, subject: SubjectId) -> &[usize] {
        self.rosters.get(subject).map_or(&[], Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_checker() -> ConflictChecker {
        let e = Enrollment::new()
            .with_student(10, [0, 1, 2])
            .with_student(11, [0, 2])
            .with_student(12, [3]);
        ConflictChecker::new(&e, 4)
    }

    #[test]
    fn test_no_conflict_on_empty_assignment() {
        let c = sample_checker();
        let a = Assignment::empty(4);
        for day in 0..3 {
            assert!(c.conflicts(&a, 0, day).is_empty());
            assert!(!c.has_conflict(&a, 0, day));
        }
    }

    #[test]
    fn test_reports_every_student() {
        let c = sample_checker();
        let mut a = Assignment::empty(4);
        a.assign(2, 1);

        let found = c.conflicts(&a, 0, 1);
        assert_eq!(
            found,
            vec![
                Conflict {
                    student: 10,
                    subject: 2,
                },
                Conflict {
                    student: 11,
                    subject: 2,
                },
            ]
        );
        assert!(c.has_conflict(&a, 0, 1));
        assert!(c.conflicts(&a, 0, 0).is_empty());
    }

    #[test]
    fn test_own_assignment_ignored() {
        let c = sample_checker();
        let mut a = Assignment::empty(4);
        a.assign(0, 0);
        assert!(c.conflicts(&a, 0, 0).is_empty());
    }

    #[test]
    fn test_unrelated_subject_never_conflicts() {
        let c = sample_checker();
        let mut a = Assignment::empty(4);
        a.assign(0, 0);
        a.assign(1, 1);
        assert!(!c.has_conflict(&a, 3, 0));
        assert!(!c.has_conflict(&a, 3, 1));
    }

    #[test]
    fn test_valid_day_count() {
        let c = sample_checker();
        let mut a = Assignment::empty(4);
        a.assign(1, 0);
        a.assign(2, 2);
        assert_eq!(c.valid_day_count(&a, 0, 3), 1);
        assert_eq!(c.valid_day_count(&a, 3, 3), 3);
    }

    #[test]
    fn test_conflict_display() {
        let c = Conflict {
            student: 3,
            subject: 7,
        };
        assert_eq!(c.to_string(), "(student 3, subject 7)");
    }
}

//! Enrollment model.
//!
//! Records which subjects each student sits an exam in. Enrollment is the
//! only source of constraints: two subjects clash when some student is
//! enrolled in both.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::{StudentId, SubjectId};

/// Student → enrolled subjects.
///
/// Ordered maps and sets keep every derived structure (conflict graph,
/// conflict reports, traces) deterministic across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Enrollment {
    students: BTreeMap<StudentId, BTreeSet<SubjectId>>,
}

impl Enrollment {
    /// Creates an empty enrollment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a student with the given subjects.
    ///
    /// Subjects are merged if the student is already present.
    pub fn with_student(
        mut self,
        student: StudentId,
        subjects: impl IntoIterator<Item = SubjectId>,
    ) -> Self {
        self.students.entry(student).or_default().extend(subjects);
        self
    }

    /// Enrolls a student in a single subject.
    pub fn enroll(&mut self, student: StudentId, subject: SubjectId) {
        self.students.entry(student).or_default().insert(subject);
    }

    /// Subjects a student is enrolled in.
    pub fn subjects_of(&self, student: StudentId) -> Option<&BTreeSet<SubjectId>> {
        self.students.get(&student)
    }

    /// Students enrolled in a subject, in ascending order.
    pub fn students_in(&self, subject: SubjectId) -> Vec<StudentId> {
        self.students
            .iter()
            .filter(|(_, subjects)| subjects.contains(&subject))
            .map(|(&student, _)| student)
            .collect()
    }

    /// Iterates over `(student, subjects)` pairs in ascending student order.
    pub fn iter(&self) -> impl Iterator<Item = (StudentId, &BTreeSet<SubjectId>)> {
        self.students.iter().map(|(&student, subjects)| (student, subjects))
    }

    /// Number of students.
    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    /// Whether no student is enrolled.
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Largest subject id referenced by any student.
    pub fn max_subject(&self) -> Option<SubjectId> {
        self.students
            .values()
            .filter_map(|subjects| subjects.last().copied())
            .max()
    }
}

impl FromIterator<(StudentId, BTreeSet<SubjectId>)> for Enrollment {
    fn from_iter<I: IntoIterator<Item = (StudentId, BTreeSet<SubjectId>)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |acc, (student, subjects)| {
                acc.with_student(student, subjects)
            })
    }
}

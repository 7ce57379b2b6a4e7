//! Subject conflict graph.
//!
//! Vertices are subjects; an edge joins two subjects that share at least
//! one student. The graph drives branching priority (Degree, LCV); the
//! per-student conflict check itself works from the enrollment directly.
//!
//! # Reference
//! Welsh & Powell (1967), "An upper bound for the chromatic number of a graph
//! and its application to timetabling problems"

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::{Enrollment, StudentId, SubjectId};
use crate::error::{Result, SchedulerError};
use crate::validation::ValidationErrorKind;

/// Symmetric subject adjacency without self-loops.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictGraph {
    neighbors: Vec<BTreeSet<SubjectId>>,
}

impl ConflictGraph {
    /// Builds the conflict graph for `num_subjects` subjects from enrollment.
    ///
    /// # Errors
    /// `InvalidInput` if any student references a subject `>= num_subjects`.
    pub fn from_enrollment(enrollment: &Enrollment, num_subjects: usize) -> Result<Self> {
        let mut builder = ConflictGraphBuilder::new(num_subjects);
        for (student, subjects) in enrollment.iter() {
            builder.add_student(student, subjects)?;
        }
        Ok(builder.build())
    }

    /// Number of subjects (vertices).
    pub fn subject_count(&self) -> usize {
        self.neighbors.len()
    }

    /// Subjects that clash with `subject`. Empty for unknown subjects.
    pub fn neighbors(&self, subject: SubjectId) -> impl Iterator<Item = SubjectId> + '_ {
        self.neighbors
            .get(subject)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    /// Number of subjects clashing with `subject`.
    pub fn degree(&self, subject: SubjectId) -> usize {
        self.neighbors.get(subject).map_or(0, BTreeSet::len)
    }

    /// Largest degree in the graph (0 for an empty graph).
    pub fn max_degree(&self) -> usize {
        self.neighbors.iter().map(BTreeSet::len).max().unwrap_or(0)
    }

    /// Whether `a` and `b` share a student.
    pub fn conflicts(&self, a: SubjectId, b: SubjectId) -> bool {
        self.neighbors.get(a).is_some_and(|set| set.contains(&b))
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.neighbors.iter().map(BTreeSet::len).sum::<usize>() / 2
    }
}

/// Incremental construction of a [`ConflictGraph`].
///
/// Each student's subjects form a clique. Repeated edges collapse.
///
/// # Example
/// ```
/// use u_exam::models::ConflictGraphBuilder;
///
/// let mut builder = ConflictGraphBuilder::new(3);
/// builder.add_student(0, &[0, 1, 2].into()).unwrap();
/// let graph = builder.build();
/// assert_eq!(graph.edge_count(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct ConflictGraphBuilder {
    neighbors: Vec<BTreeSet<SubjectId>>,
}

impl ConflictGraphBuilder {
    /// Creates a builder for `num_subjects` isolated subjects.
    pub fn new(num_subjects: usize) -> Self {
        Self {
            neighbors: vec![BTreeSet::new(); num_subjects],
        }
    }

    /// Adds the clique induced by one student's subjects.
    ///
    /// The whole set is range-checked before any edge is added, so a
    /// rejected student leaves the builder untouched.
    pub fn add_student(
        &mut self,
        student: StudentId,
        subjects: &BTreeSet<SubjectId>,
    ) -> Result<()> {
        let num_subjects = self.neighbors.len();
        if let Some(&bad) = subjects.iter().find(|&&s| s >= num_subjects) {
            return Err(SchedulerError::invalid(
                ValidationErrorKind::SubjectOutOfRange,
                format!(
                    "Student {student} is enrolled in subject {bad}, \
                     but only subjects 0..{num_subjects} exist"
                ),
            ));
        }

        for &a in subjects {
            for &b in subjects.range(a + 1..) {
                self.neighbors[a].insert(b);
                self.neighbors[b].insert(a);
            }
        }
        Ok(())
    }

    /// Finishes construction.
    pub fn build(self) -> ConflictGraph {
        ConflictGraph {
            neighbors: self.neighbors,
        }
    }
}

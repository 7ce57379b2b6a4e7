//! Exam timetabling domain models.
//!
//! Provides the data types for describing a timetabling instance
//! (who sits which exam, how many days are available) and its solution
//! (which day each exam is held on).
//!
//! # Domain Mappings
//!
//! | u-exam | Graph coloring | Generic CSP |
//! |--------|----------------|-------------|
//! | Subject | Vertex | Variable |
//! | Day | Color | Value |
//! | Enrollment | Edge source | Constraint source |
//! | ConflictGraph | Graph | Constraint graph |
//! | Assignment | Coloring | (Partial) assignment |

mod assignment;
mod conflict_graph;
mod enrollment;
mod problem;
mod timetable;

pub use assignment::Assignment;
pub use conflict_graph::{ConflictGraph, ConflictGraphBuilder};
pub use enrollment::Enrollment;
pub use problem::ExamProblem;
pub use timetable::Timetable;

/// Subject (exam) identifier, `0..num_subjects`.
pub type SubjectId = usize;

/// Day identifier, `0..num_days`.
pub type Day = usize;

/// Student identifier. Any value; students need not be numbered densely.
pub type StudentId = usize;

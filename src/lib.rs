//! Exam timetabling as a constraint satisfaction problem.
//!
//! Assigns every subject's exam to one of a fixed number of days so that no
//! student sits two exams on the same day. Subjects are vertices, a shared
//! student is an edge, and days are colors: a graph-coloring CSP solved by
//! chronological backtracking with optional MRV, Degree and LCV heuristics.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Enrollment`, `ExamProblem`, `ConflictGraph`,
//!   `Assignment`, `Timetable`
//! - **`heuristics`**: `HeuristicConfig`, `VariableSelector` (MRV/Degree),
//!   `ValueOrderer` (LCV)
//! - **`solver`**: `ConflictChecker`, `BacktrackingSolver`, trace sinks and
//!   search statistics
//! - **`validation`**: Input checks (empty day domain, out-of-range subjects)
//!   and solution verification
//! - **`generator`**: Seeded random enrollments for experiments
//!
//! # Example
//!
//! ```
//! use u_exam::heuristics::HeuristicConfig;
//! use u_exam::models::{Enrollment, ExamProblem, Timetable};
//! use u_exam::solver::BacktrackingSolver;
//!
//! let enrollment = Enrollment::new()
//!     .with_student(0, [0, 1])
//!     .with_student(1, [1, 2]);
//! let problem = ExamProblem::new(3, 2).with_enrollment(enrollment);
//!
//! let solver = BacktrackingSolver::new(problem, HeuristicConfig::all_enabled()).unwrap();
//! let assignment = solver.solve().into_assignment().unwrap();
//!
//! let timetable = Timetable::from_assignment(&assignment, 2);
//! assert_eq!(timetable.exam_count(0) + timetable.exam_count(1), 3);
//! ```
//!
//! # References
//!
//! - Russell & Norvig (2020), "Artificial Intelligence: A Modern Approach", Ch. 6
//! - Welsh & Powell (1967), "An upper bound for the chromatic number of a graph
//!   and its application to timetabling problems"

pub mod error;
pub mod generator;
pub mod heuristics;
pub mod models;
pub mod solver;
pub mod validation;

pub use error::{Result, SchedulerError};

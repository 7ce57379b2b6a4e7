//! Backtracking CSP solver for exam timetabling.
//!
//! # Components
//!
//! - [`ConflictChecker`]: which students a trial placement would double-book
//! - [`BacktrackingSolver`]: recursive search with chronological undo,
//!   ordered by the [`heuristics`](crate::heuristics) module
//! - [`TraceSink`]: optional receiver of step events ([`SearchTrace`],
//!   [`SearchStats`], [`NullSink`])
//!
//! # Usage
//!
//! ```
//! use u_exam::heuristics::HeuristicConfig;
//! use u_exam::models::{Enrollment, ExamProblem};
//! use u_exam::solver::solve;
//!
//! let problem = ExamProblem::new(2, 1)
//!     .with_enrollment(Enrollment::new().with_student(0, [0, 1]));
//! let outcome = solve(problem, HeuristicConfig::none()).unwrap();
//! assert!(!outcome.is_solved()); // one day cannot hold two exams of one student
//! ```

mod backtracking;
mod conflict;
mod stats;
mod trace;

#[cfg(test)]
mod proptests;

pub use backtracking::{BacktrackingSolver, SolveOutcome};
pub use conflict::{Conflict, ConflictChecker};
pub use stats::SearchStats;
pub use trace::{NullSink, SearchStep, SearchTrace, StepOutcome, TraceEvent, TraceSink};

use crate::error::Result;
use crate::heuristics::HeuristicConfig;
use crate::models::ExamProblem;

/// Validates `problem` and searches for a timetable in one call.
///
/// # Errors
/// `InvalidInput` for malformed problems; see [`BacktrackingSolver::new`].
pub fn solve(problem: ExamProblem, config: HeuristicConfig) -> Result<SolveOutcome> {
    Ok(BacktrackingSolver::new(problem, config)?.solve())
}

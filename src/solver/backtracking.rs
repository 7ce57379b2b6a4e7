//! Chronological backtracking search.
//!
//! # Algorithm
//!
//! 1. Select the next unassigned subject ([`VariableSelector`]).
//! 2. Order its days ([`ValueOrderer`]).
//! 3. For each day: skip it if the conflict check reports clashes;
//!    otherwise place the subject and recurse.
//! 4. A successful recursion ends the search (first solution wins).
//!    A failed one undoes the placement and moves to the next day.
//! 5. When every day has failed, report failure to the caller.
//!
//! The placement and its undo bracket every recursive call, so a failed
//! call always returns the assignment exactly as it received it. A failed
//! top-level search therefore leaves every subject unassigned.
//!
//! # Complexity
//! Worst case O(D^N) trials for N subjects and D days. Recursion depth is N.
//!
//! # Reference
//! Golomb & Baumert (1965), "Backtrack Programming"

use std::collections::BTreeSet;
use std::time::Instant;

use tracing::{debug, trace};

use super::stats::SearchStats;
use super::trace::{NullSink, SearchStep, StepOutcome, TraceEvent, TraceSink};
use super::{Conflict, ConflictChecker};
use crate::error::Result;
use crate::heuristics::{HeuristicConfig, ValueOrderer, VariableSelector};
use crate::models::{Assignment, ConflictGraph, Day, ExamProblem, SubjectId};
use crate::validation::validate_problem;

/// Result of a solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    /// Every subject has a day and no student sits two exams on one day.
    Solved(Assignment),
    /// No such assignment exists for the given number of days.
    Unsolved,
}

impl SolveOutcome {
    /// Whether a timetable was found.
    pub fn is_solved(&self) -> bool {
        matches!(self, SolveOutcome::Solved(_))
    }

    /// The timetable, if one was found.
    pub fn assignment(&self) -> Option<&Assignment> {
        match self {
            SolveOutcome::Solved(assignment) => Some(assignment),
            SolveOutcome::Unsolved => None,
        }
    }

    /// Consumes the outcome, returning the timetable if one was found.
    pub fn into_assignment(self) -> Option<Assignment> {
        match self {
            SolveOutcome::Solved(assignment) => Some(assignment),
            SolveOutcome::Unsolved => None,
        }
    }
}

/// Exam timetabling solver.
///
/// Validates the problem and builds the conflict graph once; each call to
/// [`solve`](Self::solve) then runs an independent, deterministic search.
///
/// # Example
///
/// ```
/// use u_exam::heuristics::HeuristicConfig;
/// use u_exam::models::{Enrollment, ExamProblem};
/// use u_exam::solver::BacktrackingSolver;
///
/// // One student takes all three exams: three days are needed.
/// let enrollment = Enrollment::new().with_student(0, [0, 1, 2]);
/// let problem = ExamProblem::new(3, 3).with_enrollment(enrollment);
///
/// let solver = BacktrackingSolver::new(problem, HeuristicConfig::all_enabled()).unwrap();
/// let assignment = solver.solve().into_assignment().unwrap();
/// assert_eq!(assignment.to_days(), Some(vec![0, 1, 2]));
/// ```
#[derive(Debug, Clone)]
pub struct BacktrackingSolver {
    problem: ExamProblem,
    config: HeuristicConfig,
    graph: ConflictGraph,
    checker: ConflictChecker,
}

impl BacktrackingSolver {
    /// Validates `problem` and prepares the conflict structures.
    ///
    /// # Errors
    /// `InvalidInput` when `num_days` is zero or an enrollment references
    /// a subject outside `0..num_subjects`. No search is attempted.
    pub fn new(problem: ExamProblem, config: HeuristicConfig) -> Result<Self> {
        validate_problem(&problem)?;

        let graph = ConflictGraph::from_enrollment(&problem.enrollment, problem.num_subjects)?;
        let checker = ConflictChecker::new(&problem.enrollment, problem.num_subjects);

        debug!(
            subjects = problem.num_subjects,
            students = problem.enrollment.student_count(),
            days = problem.num_days,
            edges = graph.edge_count(),
            max_degree = graph.max_degree(),
            heuristics = %config,
            "conflict graph built"
        );

        Ok(Self {
            problem,
            config,
            graph,
            checker,
        })
    }

    /// The problem being solved.
    pub fn problem(&self) -> &ExamProblem {
        &self.problem
    }

    /// Heuristics in use.
    pub fn config(&self) -> HeuristicConfig {
        self.config
    }

    /// The subject conflict graph.
    pub fn graph(&self) -> &ConflictGraph {
        &self.graph
    }

    /// The per-student conflict checker.
    pub fn checker(&self) -> &ConflictChecker {
        &self.checker
    }

    /// Searches for a timetable without tracing.
    pub fn solve(&self) -> SolveOutcome {
        self.solve_traced(&mut NullSink)
    }

    /// Searches for a timetable and returns effort counters alongside,
    /// including the wall-clock time of the search.
    pub fn solve_with_stats(&self) -> (SolveOutcome, SearchStats) {
        let mut stats = SearchStats::new();
        let started = Instant::now();
        let outcome = self.solve_traced(&mut stats);
        stats.elapsed = started.elapsed();
        (outcome, stats)
    }

    /// Searches for a timetable, reporting every step to `sink`.
    pub fn solve_traced<S: TraceSink + ?Sized>(&self, sink: &mut S) -> SolveOutcome {
        let started = Instant::now();
        let mut search = self.search(sink);
        let solved = search.run();
        let Search { assignment, .. } = search;

        debug!(
            solved,
            heuristics = %self.config,
            elapsed_us = started.elapsed().as_micros() as u64,
            "search finished"
        );

        if solved {
            debug_assert!(assignment.is_complete());
            SolveOutcome::Solved(assignment)
        } else {
            debug_assert_eq!(
                assignment.assigned_count(),
                0,
                "failed search left a residual assignment"
            );
            SolveOutcome::Unsolved
        }
    }

    fn search<'a, S: TraceSink + ?Sized>(&'a self, sink: &'a mut S) -> Search<'a, S> {
        let num_subjects = self.problem.num_subjects;
        let num_days = self.problem.num_days;
        Search {
            selector: VariableSelector::new(&self.graph, &self.checker, num_days, self.config),
            orderer: ValueOrderer::new(&self.graph, &self.checker, num_days, self.config),
            checker: &self.checker,
            config: self.config,
            num_subjects,
            assignment: Assignment::empty(num_subjects),
            unassigned: (0..num_subjects).collect(),
            sink,
        }
    }
}

/// Mutable state of one search, owned by the driver for its duration.
struct Search<'a, S: ?Sized> {
    selector: VariableSelector<'a>,
    orderer: ValueOrderer<'a>,
    checker: &'a ConflictChecker,
    config: HeuristicConfig,
    num_subjects: usize,
    assignment: Assignment,
    unassigned: BTreeSet<SubjectId>,
    sink: &'a mut S,
}

impl<S: TraceSink + ?Sized> Search<'_, S> {
    /// One level of the recursion. Returns `true` once every subject is placed.
    fn run(&mut self) -> bool {
        let Some(subject) = self.selector.select_next(&self.assignment, &self.unassigned) else {
            return true;
        };
        let day_order = self.orderer.order_days(&mut self.assignment, subject);

        trace!(
            subject,
            depth = self.num_subjects - self.unassigned.len(),
            ?day_order,
            "subject selected"
        );
        if self.sink.is_enabled() {
            self.sink.record(TraceEvent::Selected {
                subject,
                day_order: day_order.clone(),
                schedule: self.assignment.iter().collect(),
                heuristics: self.config,
            });
        }

        for day in day_order {
            let conflicts = self.checker.conflicts(&self.assignment, subject, day);
            if !conflicts.is_empty() {
                self.emit_step(subject, day, conflicts, StepOutcome::Conflict);
                continue;
            }

            self.assignment.assign(subject, day);
            self.unassigned.remove(&subject);
            self.emit_step(subject, day, Vec::new(), StepOutcome::Assigned);

            if self.run() {
                return true;
            }

            self.assignment.unassign(subject);
            self.unassigned.insert(subject);
            trace!(subject, day, "backtracking");
            self.emit_step(subject, day, Vec::new(), StepOutcome::Backtracked);
        }

        if self.sink.is_enabled() {
            self.sink.record(TraceEvent::Exhausted { subject });
        }
        false
    }

    fn emit_step(
        &mut self,
        subject: SubjectId,
        day: Day,
        conflicts: Vec<Conflict>,
        outcome: StepOutcome,
    ) {
        if self.sink.is_enabled() {
            self.sink.record(TraceEvent::Step(SearchStep {
                subject,
                day,
                conflicts,
                outcome,
                heuristics: self.config,
            }));
        }
    }
}

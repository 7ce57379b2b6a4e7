//! Search trace events and sinks.
//!
//! The solver reports what it does through a [`TraceSink`]: which subject
//! it selected, every day it tried (and why it was rejected), every
//! backtrack, and every subject whose days ran out. Sinks are passive;
//! the solver never reads anything back from them.
//!
//! # Usage
//!
//! ```
//! use u_exam::heuristics::HeuristicConfig;
//! use u_exam::models::{Enrollment, ExamProblem};
//! use u_exam::solver::{BacktrackingSolver, SearchTrace};
//!
//! let problem = ExamProblem::new(2, 2)
//!     .with_enrollment(Enrollment::new().with_student(0, [0, 1]));
//! let solver = BacktrackingSolver::new(problem, HeuristicConfig::none()).unwrap();
//!
//! let mut trace = SearchTrace::new();
//! assert!(solver.solve_traced(&mut trace).is_solved());
//! assert_eq!(trace.steps().count(), 3); // assign, conflict, assign
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Conflict;
use crate::heuristics::HeuristicConfig;
use crate::models::{Day, SubjectId};

/// What happened to one `(subject, day)` trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepOutcome {
    /// The day clashed with an already scheduled exam.
    Conflict,
    /// The day was free and the subject was placed on it.
    Assigned,
    /// The placement led to a dead end and was undone.
    Backtracked,
}

/// One trial of a subject on a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStep {
    /// Subject being placed.
    pub subject: SubjectId,
    /// Day tried.
    pub day: Day,
    /// Clashes found; empty unless `outcome` is `Conflict`.
    pub conflicts: Vec<Conflict>,
    /// Result of the trial.
    pub outcome: StepOutcome,
    /// Heuristics active for the solve.
    pub heuristics: HeuristicConfig,
}

/// A single event emitted by the solver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraceEvent {
    /// A subject was chosen for branching and its days ordered.
    Selected {
        /// Chosen subject.
        subject: SubjectId,
        /// Order in which its days will be tried.
        day_order: Vec<Day>,
        /// `(subject, day)` placements in effect at the selection.
        schedule: Vec<(SubjectId, Day)>,
        /// Heuristics active for the solve.
        heuristics: HeuristicConfig,
    },
    /// A day was tried for the selected subject.
    Step(SearchStep),
    /// No day worked for a subject; control returns to its parent.
    Exhausted {
        /// Subject that could not be placed.
        subject: SubjectId,
    },
}

impl TraceEvent {
    /// The step record, if this is a `Step` event.
    pub fn as_step(&self) -> Option<&SearchStep> {
        match self {
            TraceEvent::Step(step) => Some(step),
            _ => None,
        }
    }

    /// Subject the event concerns.
    pub fn subject(&self) -> SubjectId {
        match self {
            TraceEvent::Selected { subject, .. } | TraceEvent::Exhausted { subject } => *subject,
            TraceEvent::Step(step) => step.subject,
        }
    }
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceEvent::Selected {
                subject,
                day_order,
                schedule,
                heuristics,
            } => {
                write!(f, "Selected subject {subject}")?;
                if *heuristics != HeuristicConfig::none() {
                    write!(f, " using {heuristics}")?;
                }
                write!(f, "; day order {day_order:?}; current schedule")?;
                if schedule.is_empty() {
                    return f.write_str(" empty");
                }
                for (i, (s, d)) in schedule.iter().enumerate() {
                    f.write_str(if i == 0 { " " } else { ", " })?;
                    write!(f, "S{s}:D{d}")?;
                }
                Ok(())
            }
            TraceEvent::Step(step) => match step.outcome {
                StepOutcome::Conflict => {
                    write!(f, "Day {} for subject {}: conflicts", step.day, step.subject)?;
                    for (i, c) in step.conflicts.iter().enumerate() {
                        f.write_str(if i == 0 { " " } else { ", " })?;
                        write!(f, "{c}")?;
                    }
                    Ok(())
                }
                StepOutcome::Assigned => {
                    write!(f, "Assigned subject {} to day {}", step.subject, step.day)
                }
                StepOutcome::Backtracked => write!(
                    f,
                    "Backtracking: removing subject {} from day {}",
                    step.subject, step.day
                ),
            },
            TraceEvent::Exhausted { subject } => {
                write!(f, "No valid day found for subject {subject}")
            }
        }
    }
}

/// Receiver of solver events.
pub trait TraceSink {
    /// Records one event.
    fn record(&mut self, event: TraceEvent);

    /// Whether events should be built at all.
    ///
    /// The solver skips event construction entirely when this is `false`.
    fn is_enabled(&self) -> bool {
        true
    }
}

/// Sink that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl TraceSink for NullSink {
    fn record(&mut self, _event: TraceEvent) {}

    fn is_enabled(&self) -> bool {
        false
    }
}

impl<S: TraceSink + ?Sized> TraceSink for &mut S {
    fn record(&mut self, event: TraceEvent) {
        (**self).record(event);
    }

    fn is_enabled(&self) -> bool {
        (**self).is_enabled()
    }
}

/// Fans every event out to both sinks.
impl<A: TraceSink, B: TraceSink> TraceSink for (A, B) {
    fn record(&mut self, event: TraceEvent) {
        match (self.0.is_enabled(), self.1.is_enabled()) {
            (true, true) => {
                self.0.record(event.clone());
                self.1.record(event);
            }
            (true, false) => self.0.record(event),
            (false, true) => self.1.record(event),
            (false, false) => {}
        }
    }

    fn is_enabled(&self) -> bool {
        self.0.is_enabled() || self.1.is_enabled()
    }
}

/// Ordered, append-only record of a search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchTrace {
    events: Vec<TraceEvent>,
}

impl SearchTrace {
    /// Creates an empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// All events in emission order.
    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    /// Only the per-day step records.
    pub fn steps(&self) -> impl Iterator<Item = &SearchStep> {
        self.events.iter().filter_map(TraceEvent::as_step)
    }

    /// Number of events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Renders the trace as one line per event.
    pub fn to_log(&self) -> String {
        self.events
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl TraceSink for SearchTrace {
    fn record(&mut self, event: TraceEvent) {
        self.events.push(event);
    }
}

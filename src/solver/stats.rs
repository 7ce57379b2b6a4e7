//! Search effort counters.
//!
//! Compares how much work different heuristic configurations spend on
//! the same instance.
//!
//! | Counter | Incremented on |
//! |---------|----------------|
//! | selections | a subject chosen for branching |
//! | attempts | any `(subject, day)` trial |
//! | conflicts | a trial rejected by the conflict check |
//! | assignments | a trial accepted |
//! | backtracks | an accepted trial undone |
//! | exhausted | a subject with no working day |
//!
//! `elapsed` is wall-clock search time, filled in by
//! [`BacktrackingSolver::solve_with_stats`](super::BacktrackingSolver::solve_with_stats).

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::trace::{StepOutcome, TraceEvent, TraceSink};

/// Effort counters gathered from trace events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Branching decisions.
    pub selections: u64,
    /// Day trials (conflicting or not).
    pub attempts: u64,
    /// Trials rejected by a conflict.
    pub conflicts: u64,
    /// Trials that placed a subject.
    pub assignments: u64,
    /// Placements undone.
    pub backtracks: u64,
    /// Subjects whose days all failed.
    pub exhausted: u64,
    /// Wall-clock time of the search; zero when gathered as a plain sink.
    #[serde(skip)]
    pub elapsed: Duration,
}

impl SearchStats {
    /// Creates zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the search reached a solution without undoing anything.
    pub fn is_backtrack_free(&self) -> bool {
        self.backtracks == 0
    }

    /// Fraction of trials rejected by a conflict (0.0 with no trials).
    pub fn conflict_rate(&self) -> f64 {
        if self.attempts == 0 {
            0.0
        } else {
            self.conflicts as f64 / self.attempts as f64
        }
    }
}

impl TraceSink for SearchStats {
    fn record(&mut self, event: TraceEvent) {
        match event {
            TraceEvent::Selected { .. } => self.selections += 1,
            TraceEvent::Step(step) => match step.outcome {
                StepOutcome::Conflict => {
                    self.attempts += 1;
                    self.conflicts += 1;
                }
                StepOutcome::Assigned => {
                    self.attempts += 1;
                    self.assignments += 1;
                }
                StepOutcome::Backtracked => self.backtracks += 1,
            },
            TraceEvent::Exhausted { .. } => self.exhausted += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristics::HeuristicConfig;
    use crate::solver::SearchStep;

    fn step(outcome: StepOutcome) -> TraceEvent {
        TraceEvent::Step(SearchStep {
            subject: 0,
            day: 0,
            conflicts: vec![],
            outcome,
            heuristics: HeuristicConfig::none(),
        })
    }

    #[test]
    fn test_counts() {
        let mut stats = SearchStats::new();
        stats.record(TraceEvent::Selected {
            subject: 0,
            day_order: vec![0, 1],
            schedule: vec![],
            heuristics: HeuristicConfig::none(),
        });
        stats.record(step(StepOutcome::Conflict));
        stats.record(step(StepOutcome::Assigned));
        stats.record(step(StepOutcome::Backtracked));
        stats.record(TraceEvent::Exhausted { subject: 0 });

        assert_eq!(stats.selections, 1);
        assert_eq!(stats.attempts, 2);
        assert_eq!(stats.conflicts, 1);
        assert_eq!(stats.assignments, 1);
        assert_eq!(stats.backtracks, 1);
        assert_eq!(stats.exhausted, 1);
        assert!(!stats.is_backtrack_free());
        assert!((stats.conflict_rate() - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_empty_stats() {
        let stats = SearchStats::new();
        assert!(stats.is_backtrack_free());
        assert_eq!(stats.conflict_rate(), 0.0);
        assert_eq!(stats.elapsed, Duration::ZERO);
    }

    #[test]
    fn test_elapsed_not_serialized() {
        let stats = SearchStats {
            backtracks: 2,
            elapsed: Duration::from_millis(5),
            ..SearchStats::default()
        };
        let json = serde_json::to_string(&stats).unwrap();
        assert!(!json.contains("elapsed"));

        let back: SearchStats = serde_json::from_str(&json).unwrap();
        assert_eq!(back.backtracks, 2);
        assert_eq!(back.elapsed, Duration::ZERO);
    }
}

//! Subject (variable) selection: MRV and Degree.

use std::collections::BTreeSet;

use super::HeuristicConfig;
use crate::models::{Assignment, ConflictGraph, SubjectId};
use crate::solver::ConflictChecker;

/// Chooses the next subject to branch on.
///
/// # Scoring
/// Starting from 0, MRV subtracts the number of conflict-free days and
/// Degree adds the number of still-unassigned neighbors. The highest score
/// wins; ties go to the smallest subject id. With both switches off the
/// smallest unassigned id is returned without scoring.
#[derive(Debug, Clone, Copy)]
pub struct VariableSelector<'a> {
    graph: &'a ConflictGraph,
    checker: &'a ConflictChecker,
    num_days: usize,
    config: HeuristicConfig,
}

impl<'a> VariableSelector<'a> {
    /// Creates a selector over the given graph and rosters.
    pub fn new(
        graph: &'a ConflictGraph,
        checker: &'a ConflictChecker,
        num_days: usize,
        config: HeuristicConfig,
    ) -> Self {
        Self {
            graph,
            checker,
            num_days,
            config,
        }
    }

    /// Picks the next subject from `unassigned`, or `None` if it is empty.
    pub fn select_next(
        &self,
        assignment: &Assignment,
        unassigned: &BTreeSet<SubjectId>,
    ) -> Option<SubjectId> {
        if !self.config.scores_variables() {
            return unassigned.first().copied();
        }

        let mut best: Option<(SubjectId, i64)> = None;
        for &subject in unassigned {
            let score = self.score(assignment, unassigned, subject);
            // Strict comparison keeps the smallest id among equal scores.
            if best.map_or(true, |(_, top)| score > top) {
                best = Some((subject, score));
            }
        }
        best.map(|(subject, _)| subject)
    }

    /// Priority of `subject`; higher is branched on first.
    pub fn score(
        &self,
        assignment: &Assignment,
        unassigned: &BTreeSet<SubjectId>,
        subject: SubjectId,
    ) -> i64 {
        let mut score = 0i64;

        if self.config.use_mrv {
            let valid = self.checker.valid_day_count(assignment, subject, self.num_days);
            score -= valid as i64;
        }

        if self.config.use_degree {
            let open = self
                .graph
                .neighbors(subject)
                .filter(|n| unassigned.contains(n))
                .count();
            score += open as i64;
        }

        score
    }
}

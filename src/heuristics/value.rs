//! Day (value) ordering: Least Constraining Value.

use super::HeuristicConfig;
use crate::models::{Assignment, ConflictGraph, Day, SubjectId};
use crate::solver::ConflictChecker;

/// LCV score of a candidate day. Lower is tried first.
///
/// `Infeasible` orders after every finite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DayScore {
    /// Total number of neighbor days that would conflict.
    Feasible(usize),
    /// The day already conflicts for the subject itself.
    Infeasible,
}

/// Orders the candidate days of a subject.
///
/// # Algorithm
/// For each day that is itself conflict-free, the day is tentatively
/// assigned and, for every unassigned neighbor, the neighbor's conflicting
/// days are counted. Days are then stable-sorted by that total, so equal
/// scores keep ascending day order.
#[derive(Debug, Clone, Copy)]
pub struct ValueOrderer<'a> {
    graph: &'a ConflictGraph,
    checker: &'a ConflictChecker,
    num_days: usize,
    config: HeuristicConfig,
}

impl<'a> ValueOrderer<'a> {
    /// Creates an orderer over the given graph and rosters.
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

    /// Days to try for `subject`, in order.
    ///
    /// `assignment` is borrowed mutably for tentative placements and is
    /// returned unchanged.
    pub fn order_days(&self, assignment: &mut Assignment, subject: SubjectId) -> Vec<Day> {
        let mut days: Vec<Day> = (0..self.num_days).collect();
        if !self.config.use_lcv {
            return days;
        }

        let scores: Vec<DayScore> = (0..self.num_days)
            .map(|day| self.score_day(assignment, subject, day))
            .collect();
        days.sort_by_key(|&day| scores[day]);
        days
    }

    /// LCV score of placing `subject` on `day`.
    pub fn score_day(&self, assignment: &mut Assignment, subject: SubjectId, day: Day) -> DayScore {
        if self.checker.has_conflict(assignment, subject, day) {
            return DayScore::Infeasible;
        }

        let previous = assignment.assign(subject, day);
        let eliminated: usize = self
            .graph
            .neighbors(subject)
            .filter(|&n| !assignment.is_assigned(n))
            .map(|n| self.num_days - self.checker.valid_day_count(assignment, n, self.num_days))
            .sum();
        match previous {
            Some(prev) => assignment.assign(subject, prev),
            None => assignment.unassign(subject),
        };

        DayScore::Feasible(eliminated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Enrollment;

    // Path 0 - 1 - 2.
    fn fixture() -> (ConflictGraph, ConflictChecker) {
        let e = Enrollment::new()
            .with_student(0, [0, 1])
            .with_student(1, [1, 2]);
        (
            ConflictGraph::from_enrollment(&e, 3).unwrap(),
            ConflictChecker::new(&e, 3),
        )
    }

    #[test]
    fn test_lcv_disabled_is_ascending() {
        let (g, c) = fixture();
        let mut a = Assignment::empty(3);
        a.assign(2, 2);
        let config = HeuristicConfig::all_enabled().with_lcv(false);
        let orderer = ValueOrderer::new(&g, &c, 3, config);
        assert_eq!(orderer.order_days(&mut a, 0), vec![0, 1, 2]);
    }

    #[test]
    fn test_lcv_prefers_shared_day() {
        let (g, c) = fixture();
        let mut a = Assignment::empty(3);
        a.assign(2, 2);
        let before = a.clone();

        let orderer = ValueOrderer::new(&g, &c, 3, HeuristicConfig::none().with_lcv(true));
        // Neighbor 1 already loses day 2; putting 0 there costs nothing extra.
        assert_eq!(orderer.score_day(&mut a, 0, 0), DayScore::Feasible(2));
        assert_eq!(orderer.score_day(&mut a, 0, 2), DayScore::Feasible(1));
        assert_eq!(orderer.order_days(&mut a, 0), vec![2, 0, 1]);
        assert_eq!(a, before);
    }

    #[test]
    fn test_infeasible_days_last() {
        let (g, c) = fixture();
        let mut a = Assignment::empty(3);
        a.assign(2, 0);

        let orderer = ValueOrderer::new(&g, &c, 3, HeuristicConfig::none().with_lcv(true));
        assert_eq!(orderer.score_day(&mut a, 1, 0), DayScore::Infeasible);
        assert_eq!(orderer.order_days(&mut a, 1), vec![1, 2, 0]);
    }

    #[test]
    fn test_assigned_neighbors_not_counted() {
        let (g, c) = fixture();
        let mut a = Assignment::empty(3);
        a.assign(0, 0);
        a.assign(2, 1);

        let orderer = ValueOrderer::new(&g, &c, 3, HeuristicConfig::none().with_lcv(true));
        assert_eq!(orderer.score_day(&mut a, 1, 2), DayScore::Feasible(0));
    }

    #[test]
    fn test_day_score_ordering() {
        assert!(DayScore::Feasible(0) < DayScore::Feasible(5));
        assert!(DayScore::Feasible(usize::MAX) < DayScore::Infeasible);
    }
}

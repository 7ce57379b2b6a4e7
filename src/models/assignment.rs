//! Subject → day assignment.
//!
//! The search mutates one assignment in place: a day is set when a trial
//! passes the conflict check and cleared again on backtrack.

use serde::{Deserialize, Serialize};

use super::{Day, SubjectId};

/// A (possibly partial) mapping from every subject to an optional day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    days: Vec<Option<Day>>,
}

impl Assignment {
    /// Creates an assignment with every subject unassigned.
    pub fn empty(num_subjects: usize) -> Self {
        Self {
            days: vec![None; num_subjects],
        }
    }

    /// Number of subjects covered (assigned or not).
    pub fn subject_count(&self) -> usize {
        self.days.len()
    }

    /// Day assigned to `subject`, if any.
    #[inline]
    pub fn day_of(&self, subject: SubjectId) -> Option<Day> {
        self.days.get(subject).copied().flatten()
    }

    /// Whether `subject` currently has a day.
    #[inline]
    pub fn is_assigned(&self, subject: SubjectId) -> bool {
        self.day_of(subject).is_some()
    }

    /// Puts `subject` on `day`, returning the previous day.
    ///
    /// # Panics
    /// If `subject` is out of range.
    pub fn assign(&mut self, subject: SubjectId, day: Day) -> Option<Day> {
        self.days[subject].replace(day)
    }

    /// Clears `subject`, returning the day it had.
    ///
    /// # Panics
    /// If `subject` is out of range.
    pub fn unassign(&mut self, subject: SubjectId) -> Option<Day> {
        self.days[subject].take()
    }

    /// Number of subjects with a day.
    pub fn assigned_count(&self) -> usize {
        self.days.iter().filter(|d| d.is_some()).count()
    }

    /// Whether every subject has a day.
    pub fn is_complete(&self) -> bool {
        self.days.iter().all(Option::is_some)
    }

    /// Subjects without a day, in ascending order.
    pub fn unassigned(&self) -> impl Iterator<Item = SubjectId> + '_ {
        self.days
            .iter()
            .enumerate()
            .filter(|(_, d)| d.is_none())
            .map(|(s, _)| s)
    }

    /// Iterates over `(subject, day)` for assigned subjects.
    pub fn iter(&self) -> impl Iterator<Item = (SubjectId, Day)> + '_ {
        self.days
            .iter()
            .enumerate()
            .filter_map(|(s, d)| d.map(|day| (s, day)))
    }

    /// Days as a dense vector, or `None` if any subject is unassigned.
    pub fn to_days(&self) -> Option<Vec<Day>> {
        self.days.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_and_undo() {
        let mut a = Assignment::empty(3);
        assert_eq!(a.assign(1, 2), None);
        assert_eq!(a.day_of(1), Some(2));
        assert_eq!(a.assigned_count(), 1);

        assert_eq!(a.unassign(1), Some(2));
        assert_eq!(a, Assignment::empty(3));
    }

    #[test]
    fn test_complete() {
        let mut a = Assignment::empty(2);
        a.assign(0, 0);
        assert!(!a.is_complete());
        assert_eq!(a.to_days(), None);
        assert_eq!(a.unassigned().collect::<Vec<_>>(), vec![1]);

        a.assign(1, 0);
        assert!(a.is_complete());
        assert_eq!(a.to_days(), Some(vec![0, 0]));
    }

    #[test]
    fn test_iter_assigned_in_subject_order() {
        let mut a = Assignment::empty(4);
        a.assign(3, 1);
        a.assign(0, 2);
        assert_eq!(a.iter().collect::<Vec<_>>(), vec![(0, 2), (3, 1)]);
        assert_eq!(a.assigned_count(), 2);
    }

    #[test]
    fn test_out_of_range_lookup() {
        let a = Assignment::empty(1);
        assert_eq!(a.day_of(5), None);
        assert!(!a.is_assigned(5));
    }

    #[test]
    fn test_empty_problem_is_complete() {
        assert!(Assignment::empty(0).is_complete());
    }
}

//! Timetable (solution) view.
//!
//! Groups an assignment by day: which exams are held on each day, how
//! busy each day is, and on which days a given student sits exams.

use serde::{Deserialize, Serialize};

use super::{Assignment, Day, Enrollment, StudentId, SubjectId};

/// Day-major view of an assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timetable {
    /// Subjects held on each day, ascending within a day.
    by_day: Vec<Vec<SubjectId>>,
    /// Subjects without a day (or with a day outside `0..num_days`).
    unscheduled: Vec<SubjectId>,
    assignment: Assignment,
}

impl Timetable {
    /// Builds the view of `assignment` over `num_days` days.
    pub fn from_assignment(assignment: &Assignment, num_days: usize) -> Self {
        let mut by_day = vec![Vec::new(); num_days];
        let mut unscheduled = Vec::new();

        for subject in 0..assignment.subject_count() {
            match assignment.day_of(subject) {
                Some(day) if day < num_days => by_day[day].push(subject),
                _ => unscheduled.push(subject),
            }
        }

        Self {
            by_day,
            unscheduled,
            assignment: assignment.clone(),
        }
    }

    /// Number of days.
    pub fn day_count(&self) -> usize {
        self.by_day.len()
    }

    /// Subjects held on `day`. Empty for unknown days.
    pub fn subjects_on(&self, day: Day) -> &[SubjectId] {
        self.by_day.get(day).map_or(&[], Vec::as_slice)
    }

    /// Number of exams held on `day`.
    pub fn exam_count(&self, day: Day) -> usize {
        self.subjects_on(day).len()
    }

    /// Day with the most exams (lowest id on ties).
    pub fn busiest_day(&self) -> Option<Day> {
        (0..self.by_day.len()).rev().max_by_key(|&d| self.by_day[d].len())
    }

    /// Subjects left without a day.
    pub fn unscheduled(&self) -> &[SubjectId] {
        &self.unscheduled
    }

    /// Whether every subject has a day.
    pub fn is_complete(&self) -> bool {
        self.unscheduled.is_empty()
    }

    /// `(subject, day)` for each exam a student sits, ascending by subject.
    pub fn exam_days_for(
        &self,
        enrollment: &Enrollment,
        student: StudentId,
    ) -> Vec<(SubjectId, Option<Day>)> {
        enrollment
            .subjects_of(student)
            .into_iter()
            .flatten()
            .map(|&s| (s, self.assignment.day_of(s)))
            .collect()
    }

    /// The assignment behind this view.
    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_assignment() -> Assignment {
        let mut a = Assignment::empty(5);
        a.assign(0, 1);
        a.assign(1, 0);
        a.assign(2, 1);
        a.assign(3, 2);
        a
    }

    #[test]
    fn test_group_by_day() {
        let t = Timetable::from_assignment(&sample_assignment(), 3);
        assert_eq!(t.day_count(), 3);
        assert_eq!(t.subjects_on(1), &[0, 2]);
        assert_eq!(t.exam_count(0), 1);
        assert_eq!(t.subjects_on(9), &[] as &[SubjectId]);
        assert_eq!(t.unscheduled(), &[4]);
        assert!(!t.is_complete());
    }

    #[test]
    fn test_busiest_day() {
        let t = Timetable::from_assignment(&sample_assignment(), 3);
        assert_eq!(t.busiest_day(), Some(1));

        let mut even = Assignment::empty(2);
        even.assign(0, 1);
        even.assign(1, 0);
        let t2 = Timetable::from_assignment(&even, 2);
        assert_eq!(t2.busiest_day(), Some(0));

        assert_eq!(Timetable::from_assignment(&Assignment::empty(0), 0).busiest_day(), None);
    }

    #[test]
    fn test_day_outside_range_is_unscheduled() {
        let mut a = Assignment::empty(1);
        a.assign(0, 7);
        let t = Timetable::from_assignment(&a, 2);
        assert_eq!(t.unscheduled(), &[0]);
    }

    #[test]
    fn test_exam_days_for_student() {
        let e = Enrollment::new().with_student(3, [0, 3, 4]);
        let t = Timetable::from_assignment(&sample_assignment(), 3);

        assert_eq!(
            t.exam_days_for(&e, 3),
            vec![(0, Some(1)), (3, Some(2)), (4, None)]
        );
        assert!(t.exam_days_for(&e, 99).is_empty());
    }
}

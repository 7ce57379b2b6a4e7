//! Property-based tests for the backtracking solver.
//!
//! Instances are kept small (at most 7 subjects, 3 days) so exhaustive
//! failures stay cheap across all 8 heuristic configurations.

use proptest::prelude::*;
use std::collections::BTreeSet;

use super::{BacktrackingSolver, SolveOutcome};
use crate::heuristics::HeuristicConfig;
use crate::models::{Enrollment, ExamProblem, SubjectId};
use crate::validation::verify_assignment;

/// Strategy for a well-formed instance: subject count, per-student subject
/// sets (1 to 3 subjects each), and a day count.
fn instance(max_days: usize) -> impl Strategy<Value = ExamProblem> {
    (1usize..=7).prop_flat_map(move |num_subjects| {
        let per_student = 1..=num_subjects.min(3);
        (
            prop::collection::vec(
                prop::collection::btree_set(0..num_subjects, per_student),
                0..10,
            ),
            1..=max_days,
        )
            .prop_map(move |(students, num_days)| {
                let enrollment = students
                    .into_iter()
                    .enumerate()
                    .collect::<Enrollment>();
                ExamProblem::new(num_subjects, num_days).with_enrollment(enrollment)
            })
    })
}

fn solve(problem: &ExamProblem, config: HeuristicConfig) -> SolveOutcome {
    BacktrackingSolver::new(problem.clone(), config)
        .expect("generated instances are valid")
        .solve()
}

fn config() -> impl Strategy<Value = HeuristicConfig> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(mrv, degree, lcv)| {
        HeuristicConfig::none()
            .with_mrv(mrv)
            .with_degree(degree)
            .with_lcv(lcv)
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every solution is total and no student sits two exams on one day.
    #[test]
    fn solutions_are_valid(problem in instance(3), config in config()) {
        if let SolveOutcome::Solved(assignment) = solve(&problem, config) {
            prop_assert!(assignment.is_complete());
            prop_assert!(verify_assignment(&problem.enrollment, &assignment).is_empty());

            for (_, subjects) in problem.enrollment.iter() {
                let days: BTreeSet<_> = subjects
                    .iter()
                    .map(|&s| assignment.day_of(s))
                    .collect();
                prop_assert_eq!(days.len(), subjects.len());
            }
        }
    }

    /// Heuristics change the search order, never feasibility.
    #[test]
    fn feasibility_is_heuristic_invariant(problem in instance(3)) {
        let baseline = solve(&problem, HeuristicConfig::none()).is_solved();
        for config in HeuristicConfig::all() {
            prop_assert_eq!(solve(&problem, config).is_solved(), baseline, "{}", config);
        }
    }

    /// Repeated solves of the same input give the same answer.
    #[test]
    fn solving_is_deterministic(problem in instance(3), config in config()) {
        let solver = BacktrackingSolver::new(problem, config).unwrap();
        prop_assert_eq!(solver.solve(), solver.solve());
    }

    /// More days than the maximum conflict degree always suffice.
    #[test]
    fn degree_plus_one_days_suffice(problem in instance(1), config in config()) {
        let graph = BacktrackingSolver::new(problem.clone(), config).unwrap().graph().clone();
        let problem = problem.with_days(graph.max_degree() + 1);
        prop_assert!(solve(&problem, config).is_solved());
    }

    /// Subjects that share a student never share a day.
    #[test]
    fn conflicting_subjects_get_distinct_days(problem in instance(3), config in config()) {
        let solver = BacktrackingSolver::new(problem.clone(), config).unwrap();
        if let Some(assignment) = solver.solve().into_assignment() {
            for a in 0..problem.num_subjects {
                let neighbors: Vec<SubjectId> = solver.graph().neighbors(a).collect();
                for b in neighbors {
                    prop_assert_ne!(assignment.day_of(a), assignment.day_of(b));
                }
            }
        }
    }
}

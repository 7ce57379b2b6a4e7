//! Variable and value ordering heuristics.
//!
//! The search asks two questions at every node: which subject to branch
//! on next, and in which order to try its days. Both answers are driven
//! by a single immutable [`HeuristicConfig`].
//!
//! | Heuristic | Question | Preference |
//! |-----------|----------|------------|
//! | MRV | which subject | fewest conflict-free days |
//! | Degree | which subject | most unassigned neighbors |
//! | LCV | which day | eliminates fewest neighbor days |
//!
//! # Usage
//!
//! ```
//! use u_exam::heuristics::HeuristicConfig;
//!
//! let config = HeuristicConfig::none().with_mrv(true).with_lcv(true);
//! assert_eq!(config.to_string(), "MRV + LCV");
//! assert_eq!(HeuristicConfig::all().len(), 8);
//! ```
//!
//! # References
//!
//! - Russell & Norvig (2020), "Artificial Intelligence: A Modern Approach", Ch. 6.3
//! - Brélaz (1979), "New methods to color the vertices of a graph"

mod value;
mod variable;

pub use value::{DayScore, ValueOrderer};
pub use variable::VariableSelector;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Heuristic switches for one solve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct HeuristicConfig {
    /// Minimum Remaining Values: branch on the most constrained subject.
    pub use_mrv: bool,
    /// Degree: branch on the subject with most unassigned neighbors.
    pub use_degree: bool,
    /// Least Constraining Value: try the least disruptive day first.
    pub use_lcv: bool,
}

impl HeuristicConfig {
    /// Plain chronological backtracking: lowest subject first, days ascending.
    pub fn none() -> Self {
        Self::default()
    }

    /// MRV, Degree and LCV all enabled.
    pub fn all_enabled() -> Self {
        Self {
            use_mrv: true,
            use_degree: true,
            use_lcv: true,
        }
    }

    /// Sets MRV.
    pub fn with_mrv(mut self, enabled: bool) -> Self {
        self.use_mrv = enabled;
        self
    }

    /// Sets Degree.
    pub fn with_degree(mut self, enabled: bool) -> Self {
        self.use_degree = enabled;
        self
    }

    /// Sets LCV.
    pub fn with_lcv(mut self, enabled: bool) -> Self {
        self.use_lcv = enabled;
        self
    }

    /// All 8 combinations, from none to all enabled.
    pub fn all() -> [Self; 8] {
        std::array::from_fn(|bits| Self {
            use_mrv: bits & 0b001 != 0,
            use_degree: bits & 0b010 != 0,
            use_lcv: bits & 0b100 != 0,
        })
    }

    /// Whether subject selection is scored (MRV or Degree).
    pub fn scores_variables(&self) -> bool {
        self.use_mrv || self.use_degree
    }

    /// Names of the enabled heuristics, in MRV, Degree, LCV order.
    pub fn active_names(&self) -> Vec<&'static str> {
        [
            (self.use_mrv, "MRV"),
            (self.use_degree, "Degree"),
            (self.use_lcv, "LCV"),
        ]
        .into_iter()
        .filter_map(|(on, name)| on.then_some(name))
        .collect()
    }
}

impl fmt::Display for HeuristicConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = self.active_names();
        if names.is_empty() {
            f.write_str("none")
        } else {
            f.write_str(&names.join(" + "))
        }
    }
}

pub mod max_min_overlap;
pub mod naive;
pub mod set_cover;

pub use max_min_overlap::MaxMinOverlapSolver;
pub use naive::NaiveSolver;
pub use set_cover::SetCoverSolver;

use crate::error::SolveError;
use crate::solver::Solver;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The registered solvers, selectable by name.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SolverKind {
    Naive,
    SetCover,
    MaxMinOverlap,
}

impl SolverKind {
    pub const ALL: [SolverKind; 3] = [
        SolverKind::Naive,
        SolverKind::SetCover,
        SolverKind::MaxMinOverlap,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SolverKind::Naive => "naive",
            SolverKind::SetCover => "set-cover",
            SolverKind::MaxMinOverlap => "max-min-overlap",
        }
    }

    /// Instantiate the solver with default settings.
    pub fn solver(self) -> Box<dyn Solver> {
        match self {
            SolverKind::Naive => Box::new(NaiveSolver),
            SolverKind::SetCover => Box::new(SetCoverSolver::default()),
            SolverKind::MaxMinOverlap => Box::new(MaxMinOverlapSolver),
        }
    }
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SolverKind {
    type Err = SolveError;

    /// Accepts the registry names, with `_` interchangeable for `-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('_', "-");
        SolverKind::ALL
            .into_iter()
            .find(|kind| kind.name() == normalized)
            .ok_or_else(|| SolveError::UnknownSolver(s.to_string()))
    }
}

/// Every registered solver with default settings.
pub fn default_solvers() -> Vec<Box<dyn Solver>> {
    SolverKind::ALL.into_iter().map(SolverKind::solver).collect()
}

//! Error types for instance construction, parsing, solving, and validation.

use crate::location::Point;
use thiserror::Error;

/// Reasons an `Instance` cannot be constructed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InstanceError {
    #[error("grid side length must be at least 1")]
    EmptyGrid,
    #[error("coverage radius must be finite and non-negative, got {0}")]
    InvalidCoverageRadius(f64),
    #[error("penalty radius must be finite and non-negative, got {0}")]
    InvalidPenaltyRadius(f64),
    #[error("city {index} at ({point}) lies outside the {side}x{side} grid")]
    CityOutOfBounds { index: usize, point: Point, side: u32 },
}

/// Malformed instance or solution text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("line {line}: expected {expected}, found {found:?}")]
    Malformed {
        line: usize,
        expected: &'static str,
        found: String,
    },
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: &'static str },
    #[error("declared {declared} entries but found {found}")]
    CountMismatch { declared: usize, found: usize },
    #[error(transparent)]
    Instance(#[from] InstanceError),
}

/// Failures a solver reports instead of looping forever or returning a
/// partial placement.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("no candidate site can cover city ({city})")]
    UnreachableCity { city: Point },
    #[error("solver did not converge within {limit} iterations")]
    IterationLimit { limit: usize },
    #[error("unknown solver {0:?}")]
    UnknownSolver(String),
}

/// The first violation found when checking a placement against its instance.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolutionError {
    #[error("tower ({0}) lies outside the grid")]
    TowerOutOfBounds(Point),
    #[error("tower ({0}) is placed more than once")]
    DuplicateTower(Point),
    #[error("city ({0}) is not covered by any tower")]
    UncoveredCity(Point),
}

/// Anything the planner entry point can fail with.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    #[error(transparent)]
    Solve(#[from] SolveError),
    #[error("invalid solution: {0}")]
    Invalid(#[from] SolutionError),
}

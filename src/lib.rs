//! Greedy tower placement on an integer grid: cover every city within a
//! coverage radius while keeping towers out of each other's penalty radius.

pub mod constants;
pub mod coverage;
pub mod error;
pub mod instance;
pub mod location;
pub mod planner;
pub mod scoring;
pub mod service;
pub mod solution;
pub mod solver;
pub mod solvers;

pub use error::*;
pub use instance::{CityId, Instance};
pub use location::Point;
pub use planner::{plan_towers, Planner, PlannerBuilder};
pub use solution::Solution;
pub use solver::Solver;
pub use solvers::{default_solvers, SolverKind};

//! NaiveSolver: one tower on every city site. Always feasible for a
//! non-negative coverage radius, and a baseline for penalty comparisons.

use crate::error::SolveError;
use crate::instance::Instance;
use crate::location::Point;
use crate::solver::Solver;
use itertools::Itertools;
use log::*;

#[derive(Clone, Copy, Debug, Default)]
pub struct NaiveSolver;

impl Solver for NaiveSolver {
    fn name(&self) -> &str {
        "naive"
    }

    fn solve(&self, instance: &Instance) -> Result<Vec<Point>, SolveError> {
        // Coincident cities share a single tower.
        let towers: Vec<Point> = instance.cities().iter().copied().unique().collect();

        debug!(
            "naive: placed {} towers for {} cities",
            towers.len(),
            instance.num_cities()
        );

        Ok(towers)
    }
}

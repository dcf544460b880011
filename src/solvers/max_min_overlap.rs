//! MaxMinOverlapSolver: greedy grid scan that places each tower where it
//! interferes with the fewest existing towers, preferring the site serving
//! the most remaining cities among equally quiet ones.
//!
//! Service uses the fixed neighborhood shape from `service`, not the
//! coverage radius. The service map is rebuilt every iteration over the
//! cities still unserved.

use crate::error::SolveError;
use crate::instance::*;
use crate::location::*;
use crate::scoring::interference_count;
use crate::service::*;
use crate::solver::*;
use log::*;
use std::cmp::Reverse;

#[derive(Clone, Copy, Debug, Default)]
pub struct MaxMinOverlapSolver;

impl Solver for MaxMinOverlapSolver {
    fn name(&self) -> &str {
        "max-min-overlap"
    }

    fn solve(&self, instance: &Instance) -> Result<Vec<Point>, SolveError> {
        let cities = instance.cities();
        let side = instance.grid_side_length();
        let penalty_radius = instance.penalty_radius();
        let mut guard = IterationGuard::for_instance(instance);

        let mut remaining: Vec<CityId> = (0..cities.len()).collect();
        let mut placed: Vec<Point> = Vec::new();

        while let Some(&first) = remaining.first() {
            guard.tick()?;

            let map = build_service_map(cities, remaining.iter().copied(), side);

            // Lowest interference first, then most cities served; the
            // lexicographically first site wins remaining ties.
            let (site, served, interference) = map
                .iter()
                .map(|(&site, served)| {
                    (site, served, interference_count(&placed, site, penalty_radius))
                })
                .min_by_key(|&(_, served, interference)| (interference, Reverse(served.len())))
                .ok_or(SolveError::UnreachableCity {
                    city: cities[first],
                })?;

            trace!(
                "max-min-overlap: tower {} at ({}) serves {} cities, {} interfering",
                placed.len(),
                site,
                served.len(),
                interference
            );

            placed.push(site);
            remaining.retain(|id| !served.contains(id));
        }

        debug!(
            "max-min-overlap: placed {} towers for {} cities",
            placed.len(),
            cities.len()
        );

        Ok(placed)
    }
}

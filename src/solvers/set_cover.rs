//! SetCoverSolver: greedy weighted set cover with interference-aware
//! selection.
//!
//! Each iteration ranks the remaining coverage groups by how many uncovered
//! cities they add, keeps the best `pool_size` of them, and places a tower at
//! whichever pooled site has the fewest already-placed towers within the
//! penalty radius. A smaller pool favors coverage; a larger one favors low
//! interference.

use crate::constants::*;
use crate::coverage::*;
use crate::error::SolveError;
use crate::instance::*;
use crate::location::*;
use crate::scoring::interference_count;
use crate::solver::*;
use itertools::Itertools;
use log::*;
use std::cmp::Reverse;

#[derive(Clone, Copy, Debug)]
pub struct SetCoverSolver {
    pool_size: usize,
}

impl SetCoverSolver {
    /// A pool size of zero is treated as one.
    pub fn new(pool_size: usize) -> Self {
        SetCoverSolver {
            pool_size: pool_size.max(1),
        }
    }

    pub fn pool_size(&self) -> usize {
        self.pool_size
    }
}

impl Default for SetCoverSolver {
    fn default() -> Self {
        SetCoverSolver::new(DEFAULT_SET_COVER_POOL_SIZE)
    }
}

impl Solver for SetCoverSolver {
    fn name(&self) -> &str {
        "set-cover"
    }

    fn solve(&self, instance: &Instance) -> Result<Vec<Point>, SolveError> {
        let index = CoverageIndex::build(instance);
        let group_count = index.groups().len();
        let mut state = SetCoverState::new(instance.num_cities(), index.into_groups());
        let mut guard = IterationGuard::for_instance(instance);

        while !state.is_complete() {
            guard.tick()?;

            let choice = state
                .select(self.pool_size, instance.penalty_radius())
                .ok_or_else(|| SolveError::UnreachableCity {
                    city: state.first_uncovered(instance),
                })?;

            trace!(
                "set-cover: tower {} at ({}) covers {} new cities, {} intrusions",
                state.towers.len(),
                choice.site,
                choice.gain,
                choice.intrusions
            );

            state.commit(choice);
        }

        debug!(
            "set-cover: placed {} towers for {} cities from {} coverage groups",
            state.towers.len(),
            instance.num_cities(),
            group_count
        );

        Ok(state.towers)
    }
}

/// One candidate produced by the pool search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Choice {
    group: usize,
    site: Point,
    gain: usize,
    intrusions: usize,
}

/// Per-run accumulator.
struct SetCoverState {
    covered: Vec<bool>,
    covered_count: usize,
    towers: Vec<Point>,
    remaining: Vec<CoverageGroup>,
}

impl SetCoverState {
    fn new(num_cities: usize, groups: Vec<CoverageGroup>) -> Self {
        SetCoverState {
            covered: vec![false; num_cities],
            covered_count: 0,
            towers: Vec::new(),
            remaining: groups,
        }
    }

    fn is_complete(&self) -> bool {
        self.covered_count == self.covered.len()
    }

    /// Pick the next tower, or `None` if no remaining group adds coverage.
    ///
    /// Groups with no uncovered city are never pooled. Ranking is stable, so
    /// groups with equal gain keep their scan order; within a group and
    /// across the pool the first site with the fewest intrusions wins.
    fn select(&self, pool_size: usize, penalty_radius: f64) -> Option<Choice> {
        self.remaining
            .iter()
            .enumerate()
            .map(|(group, g)| (group, g.marginal_gain(&self.covered)))
            .filter(|&(_, gain)| gain > 0)
            .sorted_by_key(|&(_, gain)| Reverse(gain))
            .take(pool_size)
            .filter_map(|(group, gain)| {
                self.remaining[group]
                    .sites
                    .iter()
                    .map(|&site| (site, interference_count(&self.towers, site, penalty_radius)))
                    .min_by_key(|&(_, intrusions)| intrusions)
                    .map(|(site, intrusions)| Choice {
                        group,
                        site,
                        gain,
                        intrusions,
                    })
            })
            .min_by_key(|choice| choice.intrusions)
    }

    fn commit(&mut self, choice: Choice) {
        let group = self.remaining.remove(choice.group);
        for city in group.cities {
            if !self.covered[city] {
                self.covered[city] = true;
                self.covered_count += 1;
            }
        }
        self.towers.push(choice.site);
    }

    fn first_uncovered(&self, instance: &Instance) -> Point {
        let id = self.covered.iter().position(|&c| !c).unwrap_or_default();
        instance.city(id)
    }
}

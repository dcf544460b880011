//! Interference counting and the penalty model for a tower placement.

use crate::constants::*;
use crate::location::*;

/// Number of `towers` within `penalty_radius` (inclusive) of `site`.
pub fn interference_count(towers: &[Point], site: Point, penalty_radius: f64) -> usize {
    towers
        .iter()
        .filter(|tower| tower.within(site, penalty_radius))
        .count()
}

/// Penalty contributed by one tower with `overlaps` interfering neighbors.
pub fn tower_penalty(overlaps: usize) -> f64 {
    TOWER_BASE_PENALTY * (TOWER_OVERLAP_GROWTH * overlaps as f64).exp()
}

/// For every tower, the number of other towers within `penalty_radius`.
pub fn overlap_counts(towers: &[Point], penalty_radius: f64) -> Vec<usize> {
    towers
        .iter()
        .enumerate()
        .map(|(i, tower)| {
            towers
                .iter()
                .enumerate()
                .filter(|&(j, other)| i != j && other.within(*tower, penalty_radius))
                .count()
        })
        .collect()
}

/// Total penalty of a placement.
pub fn placement_penalty(towers: &[Point], penalty_radius: f64) -> f64 {
    overlap_counts(towers, penalty_radius)
        .into_iter()
        .map(tower_penalty)
        .sum()
}

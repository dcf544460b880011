//! Coverage index: every grid point grouped by the exact set of cities it
//! covers within the coverage radius.
//!
//! Groups are kept in the order their first site is met while scanning the
//! grid x-major, and each group's sites stay in scan order. Solvers rely on
//! both orders for their tie-breaks.

use crate::instance::*;
use crate::location::*;
use fnv::FnvHashMap;

/// Ascending city ids covered from one site.
pub type CoverageSet = Vec<CityId>;

/// Candidate sites sharing one coverage set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoverageGroup {
    pub cities: CoverageSet,
    pub sites: Vec<Point>,
}

impl CoverageGroup {
    /// Number of cities in this group not yet marked in `covered`.
    pub fn marginal_gain(&self, covered: &[bool]) -> usize {
        self.cities.iter().filter(|&&c| !covered[c]).count()
    }
}

#[derive(Clone, Debug, Default)]
pub struct CoverageIndex {
    groups: Vec<CoverageGroup>,
}

impl CoverageIndex {
    /// Scan every grid point of `instance`. Costs O(L^2 * cities).
    pub fn build(instance: &Instance) -> Self {
        let radius = instance.coverage_radius();
        let mut lookup: FnvHashMap<CoverageSet, usize> = FnvHashMap::default();
        let mut groups: Vec<CoverageGroup> = Vec::new();

        for site in grid_points(instance.grid_side_length()) {
            let cities: CoverageSet = instance
                .cities()
                .iter()
                .enumerate()
                .filter(|(_, city)| city.within(site, radius))
                .map(|(id, _)| id)
                .collect();

            match lookup.get(&cities) {
                Some(&index) => groups[index].sites.push(site),
                None => {
                    lookup.insert(cities.clone(), groups.len());
                    groups.push(CoverageGroup {
                        cities,
                        sites: vec![site],
                    });
                }
            }
        }

        CoverageIndex { groups }
    }

    pub fn groups(&self) -> &[CoverageGroup] {
        &self.groups
    }

    pub fn into_groups(self) -> Vec<CoverageGroup> {
        self.groups
    }
}

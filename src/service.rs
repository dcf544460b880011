//! Service shape: the fixed discretized neighborhood of grid points that may
//! serve a city, used by the max-min-overlap solver in place of the
//! instance's coverage radius.

use crate::constants::*;
use crate::instance::*;
use crate::location::*;
use std::collections::BTreeMap;

/// Grid points that can serve at least one city, ordered lexicographically,
/// each with the cities it serves in the order they were offered.
pub type ServiceMap = BTreeMap<Point, Vec<CityId>>;

/// Offsets from a city to every point that can serve it: the 5x5 square
/// around the city plus the four points three steps away along each axis.
pub fn service_offsets() -> impl Iterator<Item = (i32, i32)> {
    let core = itertools::iproduct!(
        -SERVICE_CORE_RADIUS..=SERVICE_CORE_RADIUS,
        -SERVICE_CORE_RADIUS..=SERVICE_CORE_RADIUS
    );
    let arms = [
        (-SERVICE_ARM_REACH, 0),
        (SERVICE_ARM_REACH, 0),
        (0, SERVICE_ARM_REACH),
        (0, -SERVICE_ARM_REACH),
    ];

    core.chain(arms)
}

/// True if `site` lies in the service neighborhood of `city`.
pub fn can_serve(site: Point, city: Point) -> bool {
    let dx = site.x() - city.x();
    let dy = site.y() - city.y();
    let core = dx.abs() <= SERVICE_CORE_RADIUS && dy.abs() <= SERVICE_CORE_RADIUS;
    let arm = (dx.abs() == SERVICE_ARM_REACH && dy == 0)
        || (dx == 0 && dy.abs() == SERVICE_ARM_REACH);

    core || arm
}

/// Build the point -> servable cities map for `remaining` cities on a grid of
/// side `side`. Points outside the grid are dropped, and so are points that
/// serve nobody, since they never appear in the map.
pub fn build_service_map<I>(cities: &[Point], remaining: I, side: u32) -> ServiceMap
where
    I: IntoIterator<Item = CityId>,
{
    let mut map = ServiceMap::new();

    for id in remaining {
        let city = cities[id];
        for (dx, dy) in service_offsets() {
            if let Some(site) = city.checked_offset(dx, dy).filter(|s| s.in_grid(side)) {
                map.entry(site).or_default().push(id);
            }
        }
    }

    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use fnv::FnvHashSet;

    #[test]
    fn test_neighborhood_has_29_distinct_offsets() {
        let offsets: FnvHashSet<(i32, i32)> = service_offsets().collect();
        assert_eq!(offsets.len(), 29);
        assert!(offsets.contains(&(0, 0)));
        assert!(offsets.contains(&(-2, 2)));
        assert!(offsets.contains(&(3, 0)));
        assert!(offsets.contains(&(0, -3)));
        assert!(!offsets.contains(&(3, 1)));
    }

    #[test]
    fn test_can_serve_matches_offsets() {
        let city = Point::new(10, 10);
        for x in 5..16 {
            for y in 5..16 {
                let site = Point::new(x, y);
                let listed =
                    service_offsets().any(|(dx, dy)| city.checked_offset(dx, dy) == Some(site));
                assert_eq!(can_serve(site, city), listed, "site {:?}", site);
            }
        }
    }

    #[test]
    fn test_map_is_clipped_to_grid() {
        let cities = [Point::new(0, 0)];
        let map = build_service_map(&cities, [0], 10);

        // Quadrant of the 5x5 core (3x3) plus the two arms that stay inside.
        assert_eq!(map.len(), 11);
        assert!(map.keys().all(|p| p.in_grid(10)));
        assert!(map.contains_key(&Point::new(3, 0)));
        assert!(map.contains_key(&Point::new(0, 3)));
    }

    #[test]
    fn test_map_only_includes_remaining_cities() {
        let cities = [Point::new(2, 2), Point::new(2, 3), Point::new(9, 9)];
        let map = build_service_map(&cities, [0, 1], 10);

        assert_eq!(map.get(&Point::new(2, 2)), Some(&vec![0, 1]));
        assert!(!map.contains_key(&Point::new(9, 9)));
        assert!(map.values().all(|served| !served.is_empty()));
    }

    #[test]
    fn test_extreme_coordinates_do_not_overflow() {
        let cities = [Point::new(i32::MAX, 0), Point::new(i32::MIN, i32::MAX)];
        let map = build_service_map(&cities, [0, 1], 5);
        assert!(map.is_empty());
    }

    #[test]
    fn test_map_keys_are_lexicographic() {
        let cities = [Point::new(4, 4)];
        let map = build_service_map(&cities, [0], 10);
        let keys: Vec<Point> = map.keys().copied().collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
        assert_eq!(keys[0], Point::new(1, 4));
    }
}

//! A tower placement bound to the instance it solves, with feasibility
//! checking, penalty scoring, and the text format solutions are exchanged in.

use crate::error::*;
use crate::instance::*;
use crate::location::*;
use crate::scoring::placement_penalty;
use fnv::FnvHashSet;
use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub struct Solution<'a> {
    instance: &'a Instance,
    towers: Vec<Point>,
}

impl<'a> Solution<'a> {
    pub fn new(instance: &'a Instance, towers: Vec<Point>) -> Self {
        Solution { instance, towers }
    }

    pub fn instance(&self) -> &'a Instance {
        self.instance
    }

    pub fn towers(&self) -> &[Point] {
        &self.towers
    }

    /// Check that every tower is on the grid and unique, and that every city
    /// lies within the coverage radius of some tower.
    pub fn validate(&self) -> Result<(), SolutionError> {
        let side = self.instance.grid_side_length();
        let mut seen = FnvHashSet::default();

        for &tower in &self.towers {
            if !tower.in_grid(side) {
                return Err(SolutionError::TowerOutOfBounds(tower));
            }
            if !seen.insert(tower) {
                return Err(SolutionError::DuplicateTower(tower));
            }
        }

        let radius = self.instance.coverage_radius();
        match self
            .instance
            .cities()
            .iter()
            .find(|city| !self.towers.iter().any(|t| t.within(**city, radius)))
        {
            Some(&city) => Err(SolutionError::UncoveredCity(city)),
            None => Ok(()),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Sum over towers of `170 * exp(0.17 * w)`, where `w` counts the other
    /// towers within the penalty radius.
    pub fn penalty(&self) -> f64 {
        placement_penalty(&self.towers, self.instance.penalty_radius())
    }

    /// Parse the solution text format for `instance`: `#` comments and blank
    /// lines are skipped, then a tower count followed by one `x y` per tower.
    pub fn parse<'l, I>(instance: &'a Instance, lines: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = &'l str>,
    {
        let mut lines = content_lines(lines);
        let num_towers: usize = next_value(&mut lines, "tower count")?;
        let towers = lines
            .map(|(line, text)| parse_point(line, text))
            .collect::<Result<Vec<_>, _>>()?;

        if towers.len() != num_towers {
            return Err(ParseError::CountMismatch {
                declared: num_towers,
                found: towers.len(),
            });
        }

        Ok(Solution::new(instance, towers))
    }
}

impl fmt::Display for Solution<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Penalty: {}", self.penalty())?;
        writeln!(f, "{}", self.towers.len())?;
        for tower in &self.towers {
            writeln!(f, "{}", tower)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TOWER_BASE_PENALTY;

    fn instance() -> Instance {
        Instance::new(5, 1.0, 2.0, vec![Point::new(0, 0), Point::new(4, 4)]).unwrap()
    }

    #[test]
    fn test_valid_solution() {
        let inst = instance();
        let solution = Solution::new(&inst, vec![Point::new(0, 1), Point::new(4, 3)]);
        assert_eq!(solution.validate(), Ok(()));
        assert!((solution.penalty() - 2.0 * TOWER_BASE_PENALTY).abs() < 1e-9);
    }

    #[test]
    fn test_uncovered_city() {
        let inst = instance();
        let solution = Solution::new(&inst, vec![Point::new(0, 0)]);
        assert_eq!(
            solution.validate(),
            Err(SolutionError::UncoveredCity(Point::new(4, 4)))
        );
    }

    #[test]
    fn test_tower_out_of_bounds() {
        let inst = instance();
        let solution = Solution::new(&inst, vec![Point::new(0, 0), Point::new(5, 4)]);
        assert_eq!(
            solution.validate(),
            Err(SolutionError::TowerOutOfBounds(Point::new(5, 4)))
        );
    }

    #[test]
    fn test_duplicate_tower() {
        let inst = instance();
        let solution = Solution::new(
            &inst,
            vec![Point::new(0, 0), Point::new(4, 4), Point::new(0, 0)],
        );
        assert_eq!(
            solution.validate(),
            Err(SolutionError::DuplicateTower(Point::new(0, 0)))
        );
    }

    #[test]
    fn test_text_format_parses_back() {
        let inst = instance();
        let solution = Solution::new(&inst, vec![Point::new(0, 1), Point::new(4, 3)]);
        let text = solution.to_string();
        assert!(text.starts_with("# Penalty: "));
        assert_eq!(Solution::parse(&inst, text.lines()).unwrap(), solution);
    }

    #[test]
    fn test_parse_count_mismatch() {
        let inst = instance();
        let err = Solution::parse(&inst, "2\n0 0\n".lines()).unwrap_err();
        assert_eq!(
            err,
            ParseError::CountMismatch {
                declared: 2,
                found: 1
            }
        );
    }
}

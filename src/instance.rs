//! Problem instances: the grid, the two radii, and the cities to cover.

use crate::error::*;
use crate::location::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Index of a city within `Instance::cities`. Cities sharing coordinates are
/// still distinct entities and keep distinct ids.
pub type CityId = usize;

/// An immutable tower placement problem.
///
/// Deserialization goes through `Instance::new`, so a deserialized instance
/// satisfies the same invariants as a constructed one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawInstance")]
pub struct Instance {
    grid_side_length: u32,
    coverage_radius: f64,
    penalty_radius: f64,
    cities: Vec<Point>,
}

/// Unvalidated wire form of an `Instance`.
#[derive(Deserialize)]
struct RawInstance {
    grid_side_length: u32,
    coverage_radius: f64,
    penalty_radius: f64,
    cities: Vec<Point>,
}

impl TryFrom<RawInstance> for Instance {
    type Error = InstanceError;

    fn try_from(raw: RawInstance) -> Result<Self, Self::Error> {
        Instance::new(
            raw.grid_side_length,
            raw.coverage_radius,
            raw.penalty_radius,
            raw.cities,
        )
    }
}

impl Instance {
    pub fn new(
        grid_side_length: u32,
        coverage_radius: f64,
        penalty_radius: f64,
        cities: Vec<Point>,
    ) -> Result<Self, InstanceError> {
        if grid_side_length == 0 {
            return Err(InstanceError::EmptyGrid);
        }
        if !coverage_radius.is_finite() || coverage_radius < 0.0 {
            return Err(InstanceError::InvalidCoverageRadius(coverage_radius));
        }
        if !penalty_radius.is_finite() || penalty_radius < 0.0 {
            return Err(InstanceError::InvalidPenaltyRadius(penalty_radius));
        }
        if let Some((index, &point)) = cities
            .iter()
            .enumerate()
            .find(|(_, c)| !c.in_grid(grid_side_length))
        {
            return Err(InstanceError::CityOutOfBounds {
                index,
                point,
                side: grid_side_length,
            });
        }

        Ok(Instance {
            grid_side_length,
            coverage_radius,
            penalty_radius,
            cities,
        })
    }

    /// Build an instance without checking it, for exercising solver
    /// failure paths that validated instances cannot reach.
    #[cfg(test)]
    pub(crate) fn new_unchecked(
        grid_side_length: u32,
        coverage_radius: f64,
        penalty_radius: f64,
        cities: Vec<Point>,
    ) -> Self {
        Instance {
            grid_side_length,
            coverage_radius,
            penalty_radius,
            cities,
        }
    }

    pub fn grid_side_length(&self) -> u32 {
        self.grid_side_length
    }

    pub fn coverage_radius(&self) -> f64 {
        self.coverage_radius
    }

    pub fn penalty_radius(&self) -> f64 {
        self.penalty_radius
    }

    pub fn cities(&self) -> &[Point] {
        &self.cities
    }

    pub fn city(&self, id: CityId) -> Point {
        self.cities[id]
    }

    pub fn num_cities(&self) -> usize {
        self.cities.len()
    }

    /// Parse the line-oriented instance format. Blank lines and `#` comments
    /// are skipped; the remaining lines are the city count, grid side length,
    /// coverage radius, penalty radius, then one `x y` pair per city.
    pub fn parse<'a, I>(lines: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut lines = content_lines(lines);

        let num_cities: usize = next_value(&mut lines, "city count")?;
        let grid_side_length: u32 = next_value(&mut lines, "grid side length")?;
        let coverage_radius: f64 = next_value(&mut lines, "coverage radius")?;
        let penalty_radius: f64 = next_value(&mut lines, "penalty radius")?;

        let cities = lines
            .map(|(line, text)| parse_point(line, text))
            .collect::<Result<Vec<_>, _>>()?;

        if cities.len() != num_cities {
            return Err(ParseError::CountMismatch {
                declared: num_cities,
                found: cities.len(),
            });
        }

        Ok(Instance::new(
            grid_side_length,
            coverage_radius,
            penalty_radius,
            cities,
        )?)
    }
}

impl FromStr for Instance {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Instance::parse(s.lines())
    }
}

impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.cities.len())?;
        writeln!(f, "{}", self.grid_side_length)?;
        writeln!(f, "{}", self.coverage_radius)?;
        writeln!(f, "{}", self.penalty_radius)?;
        for city in &self.cities {
            writeln!(f, "{}", city)?;
        }
        Ok(())
    }
}

/// Non-blank, non-comment lines paired with their 1-based line numbers.
pub(crate) fn content_lines<'a, I>(lines: I) -> impl Iterator<Item = (usize, &'a str)>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .enumerate()
        .map(|(i, text)| (i + 1, text.trim()))
        .filter(|(_, text)| !text.is_empty() && !text.starts_with('#'))
}

pub(crate) fn next_value<'a, T, I>(lines: &mut I, expected: &'static str) -> Result<T, ParseError>
where
    T: FromStr,
    I: Iterator<Item = (usize, &'a str)>,
{
    let (line, text) = lines
        .next()
        .ok_or(ParseError::UnexpectedEof { expected })?;
    text.parse().map_err(|_| ParseError::Malformed {
        line,
        expected,
        found: text.to_string(),
    })
}

pub(crate) fn parse_point(line: usize, text: &str) -> Result<Point, ParseError> {
    let malformed = || ParseError::Malformed {
        line,
        expected: "an `x y` coordinate pair",
        found: text.to_string(),
    };

    let mut fields = text.split_whitespace();
    let x = fields.next().and_then(|v| v.parse().ok()).ok_or_else(malformed)?;
    let y = fields.next().and_then(|v| v.parse().ok()).ok_or_else(malformed)?;
    if fields.next().is_some() {
        return Err(malformed());
    }

    Ok(Point::new(x, y))
}

use serde::*;
use std::fmt;

/// A site on the integer grid. Ordered lexicographically by `x`, then `y`,
/// which is also the order the solvers enumerate candidate sites in.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Point {
    x: i32,
    y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    #[inline]
    pub fn x(self) -> i32 {
        self.x
    }

    #[inline]
    pub fn y(self) -> i32 {
        self.y
    }

    /// Squared Euclidean distance. Exact for any pair of grid points.
    #[inline]
    pub fn distance_squared_to(self, other: Self) -> i64 {
        let dx = (self.x as i64) - (other.x as i64);
        let dy = (self.y as i64) - (other.y as i64);

        dx * dx + dy * dy
    }

    pub fn distance_to(self, other: Self) -> f64 {
        (self.distance_squared_to(other) as f64).sqrt()
    }

    /// True if `other` lies within `radius` (inclusive) of this point.
    ///
    /// Compares squared distances so a point at exactly `radius` is always
    /// inside, independent of floating point rounding in a square root. A
    /// negative or NaN radius contains nothing.
    #[inline]
    pub fn within(self, other: Self, radius: f64) -> bool {
        radius >= 0.0 && (self.distance_squared_to(other) as f64) <= radius * radius
    }

    /// The point shifted by `(dx, dy)`, or `None` if a coordinate overflows.
    #[inline]
    pub fn checked_offset(self, dx: i32, dy: i32) -> Option<Self> {
        Some(Point {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
        })
    }

    /// True if the point lies inside the square grid `[0, side) x [0, side)`.
    #[inline]
    pub fn in_grid(self, side: u32) -> bool {
        let side = side as i64;
        (0..side).contains(&(self.x as i64)) && (0..side).contains(&(self.y as i64))
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

impl Serialize for Point {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (self.x, self.y).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Point {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        <(i32, i32)>::deserialize(deserializer).map(Point::from)
    }
}

/// Iterate every point of a `side x side` grid, x-major.
pub fn grid_points(side: u32) -> impl Iterator<Item = Point> {
    let side = side as i32;
    itertools::iproduct!(0..side, 0..side).map(|(x, y)| Point::new(x, y))
}

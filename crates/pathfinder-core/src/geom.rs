//! Display coordinates attached to graph nodes.
//!
//! A [`Point`] is carried through the graph untouched so that a front end can
//! place nodes on a map image. None of the solvers look at it.

use std::fmt;

/// A 2D integer point. X grows right, Y grows down (screen coordinates).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Whether `other` lies inside the square of half-side `radius` centred
    /// on this point (bounds exclusive). A non-positive radius contains
    /// nothing.
    #[inline]
    pub fn within(self, other: Point, radius: i32) -> bool {
        let r = radius.max(0).unsigned_abs();
        other.x.abs_diff(self.x) < r && other.y.abs_diff(self.y) < r
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

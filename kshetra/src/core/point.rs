//! Point and grid index types.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// Grid index (integer cell position)
///
/// Indices produced during decomposition are relative to the seed cell and
/// may be negative; after normalization every index is non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridIndex {
    /// X index (column)
    pub x: i32,
    /// Y index (row)
    pub y: i32,
}

/// Unit offsets for the four grid neighbours, in scan order (+x, -x, -y, +y).
pub const NEIGHBOR_OFFSETS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, -1), (0, 1)];

impl GridIndex {
    /// Index of the seed cell
    pub const ORIGIN: GridIndex = GridIndex { x: 0, y: 0 };

    /// Create a new grid index
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Index shifted by (dx, dy)
    #[inline]
    pub fn offset(&self, dx: i32, dy: i32) -> GridIndex {
        GridIndex::new(self.x + dx, self.y + dy)
    }

    /// The 4 grid neighbours in scan order (+x, -x, -y, +y)
    #[inline]
    pub fn neighbors_4(&self) -> [GridIndex; 4] {
        NEIGHBOR_OFFSETS.map(|(dx, dy)| self.offset(dx, dy))
    }

    /// Manhattan distance to another index
    #[inline]
    pub fn manhattan_distance(&self, other: &GridIndex) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// True if `other` shares a face with this index
    #[inline]
    pub fn is_adjacent(&self, other: &GridIndex) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl Add for GridIndex {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        GridIndex::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for GridIndex {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        GridIndex::new(self.x - other.x, self.y - other.y)
    }
}

/// Planar point.
///
/// Units follow the perimeter: decimal degrees in production (x = latitude,
/// y = longitude), plain units in tests. The planner never assumes either.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    /// X coordinate (latitude when geographic)
    pub x: f64,
    /// Y coordinate (longitude when geographic)
    pub y: f64,
}

impl Point2D {
    /// Create a new point
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point from a latitude/longitude pair in degrees
    #[inline]
    pub fn from_lat_lon(lat_deg: f64, lon_deg: f64) -> Self {
        Self::new(lat_deg, lon_deg)
    }

    /// Latitude in degrees (alias of `x`)
    #[inline]
    pub fn lat(&self) -> f64 {
        self.x
    }

    /// Longitude in degrees (alias of `y`)
    #[inline]
    pub fn lon(&self) -> f64 {
        self.y
    }

    /// Zero point (origin)
    pub const ZERO: Point2D = Point2D { x: 0.0, y: 0.0 };

    /// Both coordinates are finite
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Cross product (z-component of 3D cross product)
    #[inline]
    pub fn cross(&self, other: &Point2D) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Signed difference of squared axis offsets: `dx² - dy²`.
    ///
    /// This is the goal-selection metric of the wavefront stage. It is not a
    /// distance and can be negative.
    #[inline]
    pub fn diff_of_squares(&self, other: &Point2D) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx - dy * dy
    }
}

impl Add for Point2D {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Point2D::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point2D {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Point2D::new(self.x - other.x, self.y - other.y)
    }
}

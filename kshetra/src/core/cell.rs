//! Survey cell type.
//!
//! A cell is one sensor footprint on the ground. Cells are created only by
//! the flood fill, then live in an arena owned by the plan and are referred
//! to everywhere else through [`CellId`] handles.

use serde::{Deserialize, Serialize};

use super::point::{GridIndex, Point2D};

/// Stable handle to a cell in the plan's arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellId(pub usize);

impl CellId {
    /// Position in the arena
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Cell dimensions, identical for every cell of one decomposition.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CellSize {
    /// Extent along x
    pub width: f64,
    /// Extent along y
    pub height: f64,
}

impl CellSize {
    /// Create a new cell size
    #[inline]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Both extents are finite and strictly positive
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Cell area
    #[inline]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Axis-aligned bounds of a cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellBounds {
    /// Minimum corner
    pub min: Point2D,
    /// Maximum corner
    pub max: Point2D,
}

impl CellBounds {
    /// Point lies strictly inside (boundary excluded)
    #[inline]
    pub fn contains_strict(&self, p: Point2D) -> bool {
        p.x > self.min.x && p.x < self.max.x && p.y > self.min.y && p.y < self.max.y
    }
}

/// One rectangular survey cell.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    center: Point2D,
    size: CellSize,
    /// Grid index. Relative to the seed until the grid is normalized.
    pub index: GridIndex,
    /// Cell boundary crosses the perimeter
    pub border: bool,
    /// Wavefront cost, `None` until the potential field is built
    pub cost: Option<u32>,
    /// Heading for the downstream mission builder (degrees)
    pub yaw: f64,
}

impl Cell {
    /// Create a cell with default annotations (not border, no cost, yaw 0)
    pub fn new(center: Point2D, size: CellSize, index: GridIndex) -> Self {
        Self {
            center,
            size,
            index,
            border: false,
            cost: None,
            yaw: 0.0,
        }
    }

    /// Cell center
    #[inline]
    pub fn center(&self) -> Point2D {
        self.center
    }

    /// Cell size
    #[inline]
    pub fn size(&self) -> CellSize {
        self.size
    }

    /// Axis-aligned bounds
    #[inline]
    pub fn bounds(&self) -> CellBounds {
        let hw = self.size.width / 2.0;
        let hh = self.size.height / 2.0;
        CellBounds {
            min: Point2D::new(self.center.x - hw, self.center.y - hh),
            max: Point2D::new(self.center.x + hw, self.center.y + hh),
        }
    }

    /// The four boundary segments: bottom, right, top, left
    pub fn edges(&self) -> [(Point2D, Point2D); 4] {
        let b = self.bounds();
        let bl = b.min;
        let br = Point2D::new(b.max.x, b.min.y);
        let tr = b.max;
        let tl = Point2D::new(b.min.x, b.max.y);
        [(bl, br), (br, tr), (tr, tl), (tl, bl)]
    }

    /// Set the yaw used by the mission builder
    #[inline]
    pub fn set_yaw(&mut self, yaw: f64) {
        self.yaw = yaw;
    }
}

//! Core types for the Kshetra planner.
//!
//! ## Type Categories
//!
//! ### Coordinates
//! - [`Point2D`]: Planar point in perimeter units (decimal degrees in production)
//! - [`GridIndex`]: Integer cell position in the decomposition grid
//!
//! ### Cells
//! - [`Cell`]: One sensor footprint with grid index, border flag, cost and yaw
//! - [`CellId`]: Stable handle into the plan's cell arena
//! - [`CellSize`]: Footprint dimensions shared by all cells of a run
//!
//! ### Area
//! - [`Perimeter`]: Closed polygon outline of the survey area

mod cell;
mod perimeter;
mod point;

pub use cell::{Cell, CellBounds, CellId, CellSize};
pub use perimeter::{MIN_VERTICES, Perimeter};
pub use point::{GridIndex, NEIGHBOR_OFFSETS, Point2D};

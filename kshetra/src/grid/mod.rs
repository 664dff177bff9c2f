//! Dense grid built from the flood-fill output.
//!
//! The flood fill assigns indices relative to the seed, so they can be
//! negative. [`CellGrid::normalize`] shifts them so the occupied bounding box
//! starts at (0,0) and stores one [`CellId`](crate::core::CellId) per slot.
//!
//! ```text
//!  raw indices            normalized
//!  (-1, 1) ( 0, 1)        (0,2) (1,2)
//!  (-1, 0) ( 0, 0) (1,0)  (0,1) (1,1) (2,1)
//!          ( 0,-1)              (1,0)
//! ```

mod storage;

pub use storage::CellGrid;

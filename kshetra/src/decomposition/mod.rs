//! Polygon decomposition into fixed-size survey cells.
//!
//! ## Algorithm
//!
//! 1. Seed one cell at the perimeter's vertex mean, index (0,0)
//! 2. Stop there if the seed already touches the perimeter
//! 3. Otherwise grow round by round: each frontier cell spawns its four
//!    grid neighbours, dropping index collisions and non-overlapping
//!    children of border cells
//! 4. Finish when a round spawns nothing
//!
//! Index uniqueness is a hash lookup, so growth cost is linear in the
//! number of cells.

mod config;
mod flood_fill;

pub use config::FloodFillConfig;
pub use flood_fill::{Decomposition, FloodFill};

//! Potential field construction (wavefront algorithm).
//!
//! Assigns every reachable cell an integer cost equal to its hop distance
//! from a goal cell, offset so the goal's neighbours start at 3:
//!
//! ```text
//!   6 5 4 3 G        G = goal (cost 3)
//!   7 6 5 4 3
//!   8 7 6 5 4
//! ```
//!
//! Propagation is round-synchronous: all cells of one round are costed
//! before the next round starts, so the result does not depend on the
//! order cells are visited within a round.

mod field;
mod wavefront;

pub use field::{BASE_COST, PotentialField};
pub use wavefront::{Wavefront, WavefrontConfig};

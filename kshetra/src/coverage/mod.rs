//! Coverage path extraction.
//!
//! Turns a [`PotentialField`](crate::potential::PotentialField) into a visiting
//! order that reaches every occupied cell exactly once. The search descends
//! from the highest-cost cell towards the goal, always taking the steepest
//! unvisited neighbour, and backtracks along its own trail at dead ends.
//!
//! The result is a depth-first pre-order, not a walk: after a backtrack the
//! next entry can be several cells away from the previous one. Use
//! [`CoverageOrder::discontinuities`] to find those jumps.

mod planner;

pub use planner::{CoverageOrder, CoveragePlanner};

//! Exact geometric predicates used by the decomposition.
//!
//! Pure functions with no state. Degenerate (parallel) configurations are
//! resolved locally as "no intersection" and never surface as errors.

mod predicates;

pub use predicates::{polygon_overlaps_cell, segment_intersects_cell, segments_cross};

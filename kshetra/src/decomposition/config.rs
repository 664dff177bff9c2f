//! Flood-fill configuration.

use serde::{Deserialize, Serialize};

/// Ceilings for flood-fill growth.
///
/// A simple perimeter always terminates well inside these; they exist for
/// self-intersecting outlines that can leak growth.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FloodFillConfig {
    /// Maximum growth rounds
    pub max_rounds: usize,
    /// Maximum cells in the decomposition
    pub max_cells: usize,
}

impl Default for FloodFillConfig {
    fn default() -> Self {
        Self {
            max_rounds: 100_000,
            max_cells: 1_000_000,
        }
    }
}

impl FloodFillConfig {
    /// Config with the given round ceiling
    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    /// Config with the given cell ceiling
    pub fn with_max_cells(mut self, max_cells: usize) -> Self {
        self.max_cells = max_cells;
        self
    }
}

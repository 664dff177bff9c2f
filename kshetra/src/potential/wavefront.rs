//! Wavefront cost propagation.

use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use crate::core::{Cell, GridIndex, Point2D};
use crate::error::{GrowthStage, PlanError, Result};
use crate::grid::CellGrid;

use super::field::{BASE_COST, PotentialField};

/// Wavefront configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WavefrontConfig {
    /// Maximum propagation rounds before giving up
    pub max_rounds: usize,
}

impl Default for WavefrontConfig {
    fn default() -> Self {
        Self {
            max_rounds: 1_000_000,
        }
    }
}

/// Builds a [`PotentialField`] over a normalized grid.
pub struct Wavefront<'a> {
    grid: &'a CellGrid,
    config: WavefrontConfig,
}

impl<'a> Wavefront<'a> {
    /// Create a builder
    pub fn new(grid: &'a CellGrid, config: WavefrontConfig) -> Self {
        Self { grid, config }
    }

    /// Create with default configuration
    pub fn with_defaults(grid: &'a CellGrid) -> Self {
        Self::new(grid, WavefrontConfig::default())
    }

    /// Goal cell for a start position.
    ///
    /// Minimizes `(cx - sx)² - (cy - sy)²` over occupied cells, scanning in
    /// row-major order and keeping the first minimum. The metric is a signed
    /// difference of squares, so the goal is generally not the nearest cell.
    pub fn select_goal(&self, cells: &[Cell], start: Point2D) -> Option<GridIndex> {
        let mut best: Option<(GridIndex, f64)> = None;
        for (index, id) in self.grid.iter_occupied() {
            let metric = cells[id.index()].center().diff_of_squares(&start);
            if best.is_none_or(|(_, b)| metric < b) {
                best = Some((index, metric));
            }
        }
        best.map(|(index, _)| index)
    }

    /// Build the field and write each cell's cost.
    ///
    /// The goal and its occupied neighbours get [`BASE_COST`]; each further
    /// round adds one. Cells not connected to the goal stay unset.
    pub fn build(&self, cells: &mut [Cell], start: Point2D) -> Result<PotentialField> {
        let goal = self.select_goal(cells, start).ok_or_else(|| {
            PlanError::InvalidInput("potential field needs at least one cell".to_string())
        })?;

        let mut field = PotentialField::new(self.grid, goal);
        field.set(goal, BASE_COST);

        let mut wavefront: Vec<GridIndex> = Vec::new();
        for n in self.grid.occupied_neighbors(goal) {
            field.set(n, BASE_COST);
            wavefront.push(n);
        }

        let mut cost = BASE_COST + 1;
        let mut rounds = 0;

        while !wavefront.is_empty() {
            rounds += 1;
            if rounds > self.config.max_rounds {
                warn!(
                    "[Wavefront] Exceeded {} rounds at cost {}",
                    self.config.max_rounds, cost
                );
                return Err(PlanError::UnboundedGrowth {
                    stage: GrowthStage::Wavefront,
                    limit: self.config.max_rounds,
                });
            }

            let mut next = Vec::new();
            for &index in &wavefront {
                for n in self.grid.occupied_neighbors(index) {
                    if field.get(n).is_none() {
                        field.set(n, cost);
                        next.push(n);
                    }
                }
            }

            trace!("[Wavefront] Round {}: {} cells at cost {}", rounds, next.len(), cost);
            wavefront = next;
            cost += 1;
        }
        field.set_rounds(rounds);

        for (index, id) in self.grid.iter_occupied() {
            cells[id.index()].cost = field.get(index);
        }

        let unreached = self.grid.occupied_count() - field.costed_count();
        if unreached > 0 {
            warn!(
                "[Wavefront] {} cells not connected to goal ({},{})",
                unreached, goal.x, goal.y
            );
        }

        debug!(
            "[Wavefront] Goal ({},{}), max cost {:?}, {} rounds",
            goal.x,
            goal.y,
            field.max_cost(),
            rounds
        );
        Ok(field)
    }
}

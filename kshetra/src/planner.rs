//! End-to-end survey planning.
//!
//! [`SurveyPlanner`] runs the three stages in sequence and hands back a
//! [`CoveragePlan`] that owns everything they produced:
//!
//! ```text
//! Perimeter ──► FloodFill ──► CellGrid::normalize ──► Wavefront ──► CoveragePlanner
//!                  │                   │                   │               │
//!                  └──── Vec<Cell> ────┴──── CellGrid ─────┴─ Potential ───┴─ CoverageOrder
//! ```

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::config::SurveyConfig;
use crate::core::{Cell, CellId, CellSize, GridIndex, Perimeter, Point2D};
use crate::coverage::{CoverageOrder, CoveragePlanner};
use crate::decomposition::{FloodFill, FloodFillConfig};
use crate::error::{PlanError, Result};
use crate::grid::CellGrid;
use crate::potential::{PotentialField, Wavefront, WavefrontConfig};

/// Configuration for all planning stages
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Decomposition ceilings
    #[serde(default)]
    pub flood_fill: FloodFillConfig,
    /// Potential field ceilings
    #[serde(default)]
    pub wavefront: WavefrontConfig,
}

/// Summary of a finished plan.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlanStats {
    /// Cells in the decomposition
    pub cells: usize,
    /// Cells crossing the perimeter
    pub border_cells: usize,
    /// Normalized grid width
    pub grid_width: usize,
    /// Normalized grid height
    pub grid_height: usize,
    /// Flood-fill rounds
    pub flood_fill_rounds: usize,
    /// Wavefront rounds
    pub wavefront_rounds: usize,
    /// Goal cell
    pub goal: GridIndex,
    /// Highest cost in the field
    pub max_cost: u32,
    /// Dead ends hit by the coverage search
    pub backtracks: usize,
    /// Non-adjacent steps in the visiting order
    pub discontinuities: usize,
}

/// Result of a planning run.
///
/// Owns the cell arena; the grid, the field and the visiting order all refer
/// into it by [`CellId`] or [`GridIndex`].
#[derive(Clone, Debug)]
pub struct CoveragePlan {
    cells: Vec<Cell>,
    grid: CellGrid,
    field: PotentialField,
    order: CoverageOrder,
    flood_fill_rounds: usize,
}

impl CoveragePlan {
    /// Number of cells in the path
    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Path is empty (never the case for a successful plan)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Visiting order as cell handles
    #[inline]
    pub fn path(&self) -> &[CellId] {
        &self.order.cells
    }

    /// Visiting order as grid positions
    #[inline]
    pub fn path_indices(&self) -> &[GridIndex] {
        &self.order.indices
    }

    /// Cells in visiting order
    pub fn path_cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.order.cells.iter().map(|id| &self.cells[id.index()])
    }

    /// All cells in decomposition order
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cell by handle
    #[inline]
    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        self.cells.get(id.index())
    }

    /// Set the heading of one cell
    pub fn set_yaw(&mut self, id: CellId, yaw_deg: f64) -> Result<()> {
        let count = self.cells.len();
        let cell = self.cells.get_mut(id.index()).ok_or_else(|| {
            PlanError::InvalidInput(format!("no cell {} in a plan of {}", id.index(), count))
        })?;
        cell.set_yaw(yaw_deg);
        Ok(())
    }

    /// Set the same heading on every cell
    pub fn set_uniform_yaw(&mut self, yaw_deg: f64) {
        for cell in &mut self.cells {
            cell.set_yaw(yaw_deg);
        }
    }

    /// Path positions that jump to a non-adjacent cell
    pub fn discontinuities(&self) -> Vec<usize> {
        self.order.discontinuities()
    }

    /// Number of cells crossing the perimeter
    pub fn border_cells(&self) -> usize {
        self.cells.iter().filter(|c| c.border).count()
    }

    /// Normalized cell grid
    #[inline]
    pub fn grid(&self) -> &CellGrid {
        &self.grid
    }

    /// Potential field
    #[inline]
    pub fn field(&self) -> &PotentialField {
        &self.field
    }

    /// Summary statistics
    pub fn stats(&self) -> PlanStats {
        PlanStats {
            cells: self.cells.len(),
            border_cells: self.border_cells(),
            grid_width: self.grid.width(),
            grid_height: self.grid.height(),
            flood_fill_rounds: self.flood_fill_rounds,
            wavefront_rounds: self.field.rounds(),
            goal: self.field.goal(),
            max_cost: self.field.max_cost().unwrap_or(0),
            backtracks: self.order.backtracks,
            discontinuities: self.discontinuities().len(),
        }
    }
}

/// Runs decomposition, potential field and coverage in sequence.
#[derive(Clone, Debug, Default)]
pub struct SurveyPlanner {
    config: PlannerConfig,
}

impl SurveyPlanner {
    /// Create a planner
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// Stage configuration
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plan a coverage path over `perimeter` with cells of `size`, ranking
    /// cells relative to `start`.
    pub fn plan(&self, perimeter: &Perimeter, size: CellSize, start: Point2D) -> Result<CoveragePlan> {
        if !start.is_finite() {
            return Err(PlanError::InvalidInput(format!(
                "start position must be finite, got ({}, {})",
                start.x, start.y
            )));
        }

        info!(
            "[Planner] Planning over {} vertices, cell {:.3e} x {:.3e}",
            perimeter.len(),
            size.width,
            size.height
        );

        let decomposition =
            FloodFill::new(perimeter, size, self.config.flood_fill.clone()).decompose()?;
        let flood_fill_rounds = decomposition.rounds();
        let mut cells = decomposition.into_cells();

        let grid = CellGrid::normalize(&mut cells);
        debug!(
            "[Planner] Grid {}x{} with {} cells",
            grid.width(),
            grid.height(),
            grid.occupied_count()
        );

        let field = Wavefront::new(&grid, self.config.wavefront.clone()).build(&mut cells, start)?;
        let order = CoveragePlanner::new(&grid, &field).plan()?;

        let plan = CoveragePlan {
            cells,
            grid,
            field,
            order,
            flood_fill_rounds,
        };

        let gaps = plan.discontinuities().len();
        if gaps > 0 {
            warn!("[Planner] Path has {} non-adjacent steps", gaps);
        }
        info!(
            "[Planner] Planned {} cells ({} border), {} backtracks",
            plan.len(),
            plan.border_cells(),
            plan.order.backtracks
        );
        Ok(plan)
    }
}

/// Validate a survey description and plan it.
pub fn plan_survey(survey: &SurveyConfig) -> Result<CoveragePlan> {
    survey.validate()?;
    let perimeter = survey.perimeter()?;
    let size = survey.cell_size()?;
    SurveyPlanner::new(survey.planner_config()).plan(&perimeter, size, survey.start())
}

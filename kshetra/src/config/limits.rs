//! Planner ceiling section.

use serde::{Deserialize, Serialize};

use crate::decomposition::FloodFillConfig;
use crate::planner::PlannerConfig;
use crate::potential::WavefrontConfig;

use super::defaults;

/// Growth ceilings guarding against malformed perimeters
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlannerSection {
    /// Flood-fill rounds
    #[serde(default = "defaults::max_growth_rounds")]
    pub max_growth_rounds: usize,

    /// Cells created by the flood fill
    #[serde(default = "defaults::max_cells")]
    pub max_cells: usize,

    /// Wavefront rounds
    #[serde(default = "defaults::max_wavefront_rounds")]
    pub max_wavefront_rounds: usize,
}

impl Default for PlannerSection {
    fn default() -> Self {
        Self {
            max_growth_rounds: defaults::max_growth_rounds(),
            max_cells: defaults::max_cells(),
            max_wavefront_rounds: defaults::max_wavefront_rounds(),
        }
    }
}

impl PlannerSection {
    /// Convert to runtime planner configuration
    pub fn to_planner_config(&self) -> PlannerConfig {
        PlannerConfig {
            flood_fill: FloodFillConfig::default()
                .with_max_rounds(self.max_growth_rounds)
                .with_max_cells(self.max_cells),
            wavefront: WavefrontConfig {
                max_rounds: self.max_wavefront_rounds,
            },
        }
    }
}

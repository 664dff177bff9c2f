//! Waypoint export.
//!
//! Dumps the ordered cells as plain records for a downstream mission builder.

use std::fs;
use std::path::Path;

use kshetra::{CoveragePlan, GridIndex, PlanStats};
use serde::Serialize;

use crate::error::{PlanAppError, Result};

/// One cell of the visiting order
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Waypoint {
    pub seq: usize,
    pub lat: f64,
    pub lon: f64,
    pub yaw: f64,
    pub index: GridIndex,
    pub border: bool,
    pub cost: Option<u32>,
}

/// Everything written to the output file
#[derive(Clone, Debug, Serialize)]
pub struct PlanReport {
    pub stats: PlanStats,
    /// Path positions entered by a jump rather than a grid step
    pub discontinuities: Vec<usize>,
    pub waypoints: Vec<Waypoint>,
}

impl PlanReport {
    pub fn from_plan(plan: &CoveragePlan) -> Self {
        let waypoints = plan
            .path_cells()
            .enumerate()
            .map(|(seq, cell)| Waypoint {
                seq,
                lat: cell.center().lat(),
                lon: cell.center().lon(),
                yaw: cell.yaw,
                index: cell.index,
                border: cell.border,
                cost: cell.cost,
            })
            .collect();

        Self {
            stats: plan.stats(),
            discontinuities: plan.discontinuities(),
            waypoints,
        }
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| PlanAppError::Output(e.to_string()))
    }

    /// Write as YAML, creating parent directories as needed
    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_yaml()?)?;
        Ok(())
    }
}

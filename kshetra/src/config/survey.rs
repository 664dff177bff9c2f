//! Top-level survey configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{CellSize, Perimeter, Point2D};
use crate::error::{PlanError, Result};
use crate::planner::PlannerConfig;

use super::area::AreaSection;
use super::camera::CameraSection;
use super::error::ConfigLoadError;
use super::flight::FlightSection;
use super::limits::PlannerSection;

/// Complete survey description.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SurveyConfig {
    /// Camera field of view
    #[serde(default)]
    pub camera: CameraSection,

    /// Altitude and start position
    #[serde(default)]
    pub flight: FlightSection,

    /// Area to cover
    #[serde(default)]
    pub area: AreaSection,

    /// Growth ceilings
    #[serde(default)]
    pub planner: PlannerSection,
}

impl SurveyConfig {
    /// Load from a YAML file
    pub fn load(path: &Path) -> std::result::Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load `configs/survey.yaml` if present, defaults otherwise
    pub fn load_default() -> std::result::Result<Self, ConfigLoadError> {
        let path = Path::new("configs/survey.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from a YAML string
    pub fn from_yaml(yaml: &str) -> std::result::Result<Self, ConfigLoadError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Area perimeter in planar degrees
    pub fn perimeter(&self) -> Result<Perimeter> {
        self.area.to_perimeter()
    }

    /// Start position in planar degrees
    pub fn start(&self) -> Point2D {
        self.flight.start.to_point()
    }

    /// Cell size in degrees, converted at the perimeter's vertex-mean latitude
    pub fn cell_size(&self) -> Result<CellSize> {
        let reference = self.perimeter()?.vertex_mean();
        self.camera
            .to_footprint()
            .cell_size_deg(self.flight.altitude_m, reference.lat())
    }

    /// Runtime planner configuration
    pub fn planner_config(&self) -> PlannerConfig {
        self.planner.to_planner_config()
    }

    /// Check that the survey can be planned.
    pub fn validate(&self) -> Result<()> {
        self.cell_size()?;
        if !self.start().is_finite() {
            return Err(PlanError::InvalidInput(format!(
                "start position must be finite, got ({}, {})",
                self.flight.start.lat, self.flight.start.lon
            )));
        }
        let limits = &self.planner;
        if limits.max_growth_rounds == 0 || limits.max_cells == 0 || limits.max_wavefront_rounds == 0
        {
            return Err(PlanError::InvalidInput(
                "planner ceilings must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

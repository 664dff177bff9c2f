//! Camera configuration section.

use serde::{Deserialize, Serialize};

use crate::footprint::CameraFootprint;

use super::defaults;

/// Camera configuration section
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraSection {
    /// Horizontal field of view (degrees)
    #[serde(default = "defaults::fov_horizontal_deg")]
    pub fov_horizontal_deg: f64,

    /// Vertical field of view (degrees)
    #[serde(default = "defaults::fov_vertical_deg")]
    pub fov_vertical_deg: f64,
}

impl Default for CameraSection {
    fn default() -> Self {
        Self {
            fov_horizontal_deg: defaults::fov_horizontal_deg(),
            fov_vertical_deg: defaults::fov_vertical_deg(),
        }
    }
}

impl CameraSection {
    /// Convert to a footprint model
    pub fn to_footprint(&self) -> CameraFootprint {
        CameraFootprint::new(self.fov_horizontal_deg, self.fov_vertical_deg)
    }
}

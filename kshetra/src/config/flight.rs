//! Flight configuration section.

use serde::{Deserialize, Serialize};

use crate::core::Point2D;

use super::defaults;

/// Geographic position in degrees
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoPosition {
    /// Latitude (degrees)
    pub lat: f64,
    /// Longitude (degrees)
    pub lon: f64,
}

impl GeoPosition {
    /// Planar point with x = latitude, y = longitude
    pub fn to_point(&self) -> Point2D {
        Point2D::from_lat_lon(self.lat, self.lon)
    }
}

/// Flight configuration section
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlightSection {
    /// Survey altitude above ground (meters)
    #[serde(default = "defaults::altitude_m")]
    pub altitude_m: f64,

    /// Vehicle start position
    #[serde(default)]
    pub start: GeoPosition,
}

impl Default for FlightSection {
    fn default() -> Self {
        Self {
            altitude_m: defaults::altitude_m(),
            start: GeoPosition::default(),
        }
    }
}

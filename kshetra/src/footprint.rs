//! Camera ground footprint.
//!
//! Converts a downward-looking camera's field of view and flight altitude
//! into a survey cell size. The conversion to degrees uses a flat-earth
//! approximation around a reference latitude.

use serde::{Deserialize, Serialize};

use crate::core::CellSize;
use crate::error::{PlanError, Result};

/// Meters per degree used for the flat-earth conversion
pub const METERS_PER_DEGREE: f64 = 111.32 * 1000.0;

/// Field of view of a downward-looking camera.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CameraFootprint {
    /// Horizontal field of view (degrees)
    pub fov_horizontal_deg: f64,
    /// Vertical field of view (degrees)
    pub fov_vertical_deg: f64,
}

impl CameraFootprint {
    /// Create a footprint model
    pub fn new(fov_horizontal_deg: f64, fov_vertical_deg: f64) -> Self {
        Self {
            fov_horizontal_deg,
            fov_vertical_deg,
        }
    }

    /// Both angles lie in (0, 180)
    pub fn is_valid(&self) -> bool {
        let ok = |a: f64| a.is_finite() && a > 0.0 && a < 180.0;
        ok(self.fov_horizontal_deg) && ok(self.fov_vertical_deg)
    }

    /// Ground coverage `(width, height)` in meters at the given altitude.
    ///
    /// `w = 2·alt·tan(fov_h/2)`, `h = 2·alt·tan(fov_v/2)`.
    pub fn ground_size_m(&self, altitude_m: f64) -> (f64, f64) {
        let half = |fov: f64| (fov.to_radians() / 2.0).tan();
        (
            2.0 * altitude_m * half(self.fov_horizontal_deg),
            2.0 * altitude_m * half(self.fov_vertical_deg),
        )
    }

    /// Cell size in degrees at the given altitude and reference latitude.
    pub fn cell_size_deg(&self, altitude_m: f64, latitude_deg: f64) -> Result<CellSize> {
        if !self.is_valid() {
            return Err(PlanError::InvalidInput(format!(
                "field of view must be in (0, 180) degrees, got {} x {}",
                self.fov_horizontal_deg, self.fov_vertical_deg
            )));
        }
        if !altitude_m.is_finite() || altitude_m <= 0.0 {
            return Err(PlanError::InvalidInput(format!(
                "altitude must be positive, got {}",
                altitude_m
            )));
        }

        let (w, h) = self.ground_size_m(altitude_m);
        let size = CellSize::new(
            meters_to_degrees(w, latitude_deg),
            meters_to_degrees(h, latitude_deg),
        );
        if !size.is_valid() {
            return Err(PlanError::InvalidInput(format!(
                "degenerate cell size at latitude {}",
                latitude_deg
            )));
        }
        Ok(size)
    }
}

/// Meters to degrees: `m / (111320 · cos(lat))`.
#[inline]
pub fn meters_to_degrees(meters: f64, latitude_deg: f64) -> f64 {
    meters / (METERS_PER_DEGREE * latitude_deg.to_radians().cos())
}

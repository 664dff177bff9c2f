//! Survey area section.

use serde::{Deserialize, Serialize};

use crate::core::Perimeter;
use crate::error::Result;

/// Survey area section
///
/// ```yaml
/// area:
///   perimeter:
///     - [43.6799, -70.2694]
///     - [43.6816, -70.2714]
///     - [43.6829, -70.2726]
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AreaSection {
    /// Boundary vertices as `[lat, lon]`, implicitly closed
    #[serde(default)]
    pub perimeter: Vec<[f64; 2]>,
}

impl AreaSection {
    /// Build the planar perimeter
    pub fn to_perimeter(&self) -> Result<Perimeter> {
        let pairs: Vec<(f64, f64)> = self.perimeter.iter().map(|&[lat, lon]| (lat, lon)).collect();
        Perimeter::from_lat_lon(&pairs)
    }
}

//! Survey configuration loading.
//!
//! Loads a survey description from a single YAML file. Every section has
//! defaults except the area perimeter, which a usable survey must provide.
//!
//! ## Example YAML
//!
//! ```yaml
//! camera:
//!   fov_horizontal_deg: 62.2
//!   fov_vertical_deg: 48.8
//!
//! flight:
//!   altitude_m: 20.0
//!   start: { lat: 43.67988, lon: -70.26939 }
//!
//! area:
//!   perimeter:
//!     - [43.67988, -70.26939]
//!     - [43.68162, -70.27141]
//!     - [43.68288, -70.27257]
//!
//! planner:
//!   max_growth_rounds: 100000
//! ```
//!
//! | Section | Description |
//! |---------|-------------|
//! | [`CameraSection`] | Field of view |
//! | [`FlightSection`] | Altitude and start position |
//! | [`AreaSection`] | Perimeter vertices |
//! | [`PlannerSection`] | Growth ceilings |

mod area;
mod camera;
mod defaults;
mod error;
mod flight;
mod limits;
mod survey;

pub use error::ConfigLoadError;
pub use survey::SurveyConfig;

pub use area::AreaSection;
pub use camera::CameraSection;
pub use flight::{FlightSection, GeoPosition};
pub use limits::PlannerSection;

//! # Kshetra: Full-Coverage Survey Planning
//!
//! Plans a path for a downward-looking camera that photographs every part of
//! a polygonal area exactly once.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use kshetra::{CellSize, Perimeter, Point2D, SurveyPlanner};
//!
//! let perimeter = Perimeter::from_lat_lon(&[
//!     (0.0, 0.0), (4.0, 0.0), (4.0, 2.0), (0.0, 2.0),
//! ])?;
//! let plan = SurveyPlanner::default().plan(
//!     &perimeter,
//!     CellSize::new(1.0, 1.0),
//!     Point2D::from_lat_lon(0.0, 0.0),
//! )?;
//!
//! for cell in plan.path_cells() {
//!     println!("({:.1}, {:.1}) cost {:?}", cell.center().x, cell.center().y, cell.cost);
//! }
//! # Ok::<(), kshetra::PlanError>(())
//! ```
//!
//! From a survey file, with the cell size derived from the camera:
//!
//! ```rust,no_run
//! use kshetra::{SurveyConfig, plan_survey};
//!
//! let survey = SurveyConfig::load_default()?;
//! let plan = plan_survey(&survey)?;
//! println!("{} cells", plan.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Coordinate Frame
//!
//! Planar coordinates are decimal degrees with x = latitude, y = longitude.
//! Cells are axis-aligned in that frame.
//!
//! ## Data Flow
//!
//! ```text
//!     ┌────────────────┐     ┌────────────────┐
//!     │   Perimeter    │     │ CameraFootprint│
//!     │  [(lat, lon)]  │     │ fov + altitude │
//!     └───────┬────────┘     └───────┬────────┘
//!             │                      │ CellSize (deg)
//!             └──────────┬───────────┘
//!                        ▼
//!               ┌────────────────┐
//!               │   FloodFill    │  decomposition
//!               │  (Vec<Cell>)   │
//!               └───────┬────────┘
//!                       │ normalize
//!                       ▼
//!               ┌────────────────┐
//!               │   Wavefront    │  potential
//!               │ (cost per cell)│
//!               └───────┬────────┘
//!                       │
//!                       ▼
//!               ┌────────────────┐
//!               │CoveragePlanner │  coverage
//!               │ (visit order)  │
//!               └───────┬────────┘
//!                       ▼
//!                 CoveragePlan
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Points, grid indices, cells, perimeter
//! - [`geometry`]: Segment and polygon overlap predicates
//! - [`decomposition`]: Flood-fill cell decomposition
//! - [`grid`]: Dense normalized cell grid
//! - [`potential`]: Wavefront cost field
//! - [`coverage`]: Descent-with-backtracking visiting order
//! - [`footprint`]: Camera field of view to cell size
//! - [`config`]: YAML survey configuration
//! - [`planner`]: End-to-end pipeline

#![warn(missing_docs)]

pub mod config;
pub mod core;
pub mod coverage;
pub mod decomposition;
pub mod error;
pub mod footprint;
pub mod geometry;
pub mod grid;
pub mod planner;
pub mod potential;

pub use config::{ConfigLoadError, SurveyConfig};
pub use crate::core::{Cell, CellId, CellSize, GridIndex, Perimeter, Point2D};
pub use coverage::{CoverageOrder, CoveragePlanner};
pub use decomposition::{Decomposition, FloodFill, FloodFillConfig};
pub use error::{GrowthStage, PlanError, Result};
pub use footprint::CameraFootprint;
pub use grid::CellGrid;
pub use planner::{CoveragePlan, PlanStats, PlannerConfig, SurveyPlanner, plan_survey};
pub use potential::{PotentialField, Wavefront, WavefrontConfig};

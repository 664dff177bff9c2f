//! kshetra-plan - Survey Path Planner
//!
//! Loads a survey description, plans a full-coverage visiting order over the
//! area and writes the ordered cells as YAML waypoints.
//!
//! Usage:
//!   kshetra-plan --config configs/survey.toml
//!   kshetra-plan --config configs/survey.yaml --altitude 30 --output plan.yaml
//!   RUST_LOG=kshetra=debug kshetra-plan --print-field

mod config;
mod error;
mod report;

use std::path::Path;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use config::PlanConfig;
use error::Result;
use report::PlanReport;

/// Full-coverage survey planner
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Survey configuration file (.toml, .yaml or .yml)
    #[arg(short, long, default_value = "configs/survey.yaml")]
    config: String,

    /// Output waypoint file (overrides [output] path)
    #[arg(short, long)]
    output: Option<String>,

    /// Flight altitude in meters (overrides flight.altitude_m)
    #[arg(short, long)]
    altitude: Option<f64>,

    /// Heading applied to every waypoint (degrees)
    #[arg(long)]
    yaw: Option<f64>,

    /// Print the potential field table after planning
    #[arg(long)]
    print_field: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("kshetra_plan=info,kshetra=info")),
        )
        .init();

    let args = Args::parse();

    info!("Loading configuration from {}", args.config);
    let mut config = PlanConfig::load(Path::new(&args.config))?;

    if let Some(altitude) = args.altitude {
        info!("Using altitude: {} m", altitude);
        config.survey.flight.altitude_m = altitude;
    }
    if let Some(output) = args.output {
        config.output.path = output;
    }

    let size = config.survey.cell_size()?;
    info!(
        "Camera footprint at {} m: {:.3e} x {:.3e} deg",
        config.survey.flight.altitude_m, size.width, size.height
    );

    let mut plan = kshetra::plan_survey(&config.survey)?;

    if let Some(yaw) = args.yaw {
        plan.set_uniform_yaw(yaw);
    }

    let stats = plan.stats();
    info!(
        "Planned {} cells ({} border) on a {}x{} grid",
        stats.cells, stats.border_cells, stats.grid_width, stats.grid_height
    );
    info!(
        "Goal ({},{}), max cost {}, {} backtracks",
        stats.goal.x, stats.goal.y, stats.max_cost, stats.backtracks
    );

    let gaps = plan.discontinuities();
    if !gaps.is_empty() {
        warn!(
            "{} waypoints are reached by a jump (first at position {})",
            gaps.len(),
            gaps[0]
        );
    }

    if args.print_field {
        println!("{}", plan.field().render());
    } else {
        tracing::debug!("Potential field:\n{}", plan.field().render());
    }

    let report = PlanReport::from_plan(&plan);
    let output = Path::new(&config.output.path);
    report.write(output)?;
    info!("Wrote {} waypoints to {}", report.waypoints.len(), output.display());

    Ok(())
}

//! End-to-end planning tests.

mod common;

use approx::assert_relative_eq;
use common::{PAYSON_PARK, rectangle};
use kshetra::{
    CellSize, GridIndex, PlanError, Perimeter, Point2D, SurveyConfig, SurveyPlanner, plan_survey,
};

// ============================================================================
// Rectangle
// ============================================================================

#[test]
fn test_rectangle_end_to_end() {
    let plan = SurveyPlanner::default()
        .plan(&rectangle(4.0, 2.0), CellSize::new(1.0, 1.0), Point2D::ZERO)
        .unwrap();

    // Unit cells centred on every integer point of [0,4] x [0,2]
    assert_eq!(plan.len(), 15);
    assert_eq!(plan.grid().width(), 5);
    assert_eq!(plan.grid().height(), 3);

    for cell in plan.cells() {
        assert_relative_eq!(cell.center().x, cell.index.x as f64);
        assert_relative_eq!(cell.center().y, cell.index.y as f64);
    }

    // Costs grow away from the goal at (0,2)
    let field = plan.field();
    assert_eq!(field.goal(), GridIndex::new(0, 2));
    assert_eq!(field.get(GridIndex::new(0, 2)), Some(3));
    assert_eq!(field.get(GridIndex::new(2, 1)), Some(5));
    assert_eq!(field.get(GridIndex::new(4, 0)), Some(8));

    // Each cell once, a single unbroken sweep
    let costs: Vec<u32> = plan.path_cells().filter_map(|c| c.cost).collect();
    assert_eq!(costs, vec![8, 7, 6, 5, 4, 3, 4, 5, 6, 7, 6, 5, 4, 3, 3]);
    assert!(plan.discontinuities().is_empty());
}

#[test]
fn test_rectangle_render() {
    let plan = SurveyPlanner::default()
        .plan(&rectangle(4.0, 2.0), CellSize::new(1.0, 1.0), Point2D::ZERO)
        .unwrap();
    assert_eq!(
        plan.field().render(),
        "3 3 4 5 6\n3 4 5 6 7\n4 5 6 7 8\n"
    );
}

#[test]
fn test_idempotent() {
    let perimeter = rectangle(4.0, 2.0);
    let planner = SurveyPlanner::default();
    let first = planner
        .plan(&perimeter, CellSize::new(0.5, 0.5), Point2D::new(1.0, 3.0))
        .unwrap();
    let second = planner
        .plan(&perimeter, CellSize::new(0.5, 0.5), Point2D::new(1.0, 3.0))
        .unwrap();
    assert_eq!(first.path_indices(), second.path_indices());
    assert_eq!(first.cells(), second.cells());
}

#[test]
fn test_area_smaller_than_one_cell() {
    let plan = SurveyPlanner::default()
        .plan(&rectangle(0.5, 0.5), CellSize::new(1.0, 1.0), Point2D::ZERO)
        .unwrap();
    assert_eq!(plan.len(), 1);
    assert!(plan.cells()[0].border);
    assert_eq!(plan.cells()[0].cost, Some(3));
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_short_perimeter_rejected() {
    let err = Perimeter::from_lat_lon(&[(0.0, 0.0), (1.0, 0.0)]).unwrap_err();
    assert!(matches!(err, PlanError::InvalidInput(_)));
}

#[test]
fn test_zero_cell_size_rejected() {
    let err = SurveyPlanner::default()
        .plan(&rectangle(4.0, 2.0), CellSize::new(0.0, 0.0), Point2D::ZERO)
        .unwrap_err();
    assert_eq!(err.code(), "INVALID_INPUT");
}

// ============================================================================
// Geographic survey
// ============================================================================

fn payson_survey(altitude_m: f64) -> SurveyConfig {
    let mut survey = SurveyConfig::default();
    survey.flight.altitude_m = altitude_m;
    survey.flight.start.lat = PAYSON_PARK[0].0;
    survey.flight.start.lon = PAYSON_PARK[0].1;
    survey.area.perimeter = PAYSON_PARK.iter().map(|&(lat, lon)| [lat, lon]).collect();
    survey
}

#[test]
fn test_payson_park_survey() {
    let survey = payson_survey(20.0);
    let plan = plan_survey(&survey).unwrap();

    let stats = plan.stats();
    assert!(stats.cells > 100, "only {} cells", stats.cells);
    assert_eq!(plan.len(), stats.cells);
    assert!(stats.border_cells < stats.cells);
    assert!(plan.cells().iter().all(|c| c.cost.is_some()));

    // Cells are a ~24 m x 18 m footprint in degrees
    let size = plan.cells()[0].size();
    assert_relative_eq!(size.width, survey.cell_size().unwrap().width);
    assert!(size.width > size.height);
    assert!(size.width > 2.5e-4 && size.width < 3.5e-4);
}

#[test]
fn test_lower_altitude_gives_more_cells() {
    let high = plan_survey(&payson_survey(20.0)).unwrap();
    let low = plan_survey(&payson_survey(10.0)).unwrap();
    assert!(low.len() > 3 * high.len());
}

#[test]
fn test_survey_from_yaml() {
    let yaml = r#"
flight:
  altitude_m: 10.0
  start: { lat: 0.0, lon: 0.0 }
area:
  perimeter:
    - [0.0, 0.0]
    - [0.0018, 0.0]
    - [0.0018, 0.0009]
    - [0.0, 0.0009]
"#;
    let survey = SurveyConfig::from_yaml(yaml).unwrap();
    let plan = plan_survey(&survey).unwrap();
    assert_eq!(plan.len(), plan.cells().len());
    assert!(plan.len() > 1);
}

//! Unit tests for the render command.

use std::io::Write as _;

use camino::Utf8PathBuf;
use geo::Coord;
use lastmile_core::{
    DirectionsError, DirectionsService, FuelParams, RouteGeometry, RoutingRequest,
};
use rstest::{fixture, rstest};
use tempfile::TempDir;

use crate::CliError;
use crate::render::{
    RenderArgs, RenderConfig, RenderDirectionsBuilder, load_plan, render_report,
};

/// Connects the requested positions with straight segments.
struct StraightLine;

impl DirectionsService for StraightLine {
    fn fetch_route(&self, request: &RoutingRequest) -> Result<RouteGeometry, DirectionsError> {
        let mut path = vec![request.origin];
        path.extend(request.waypoints.iter().copied());
        path.push(request.destination);
        Ok(path)
    }
}

struct StraightLineBuilder;

impl RenderDirectionsBuilder for StraightLineBuilder {
    fn build(
        &self,
        _config: &RenderConfig,
    ) -> Result<Option<Box<dyn DirectionsService>>, CliError> {
        Ok(Some(Box::new(StraightLine)))
    }
}

struct OfflineBuilder;

impl RenderDirectionsBuilder for OfflineBuilder {
    fn build(
        &self,
        _config: &RenderConfig,
    ) -> Result<Option<Box<dyn DirectionsService>>, CliError> {
        Ok(None)
    }
}

const SAMPLE_PLAN: &str = r#"{
    "origin": { "x": -73.050, "y": -36.827 },
    "destination": { "x": -73.06, "y": -36.85 },
    "points": [
        {
            "name": "A",
            "address": "1 First St",
            "location": { "x": -73.02, "y": -36.80 },
            "optimal_order": 2
        },
        {
            "name": "B",
            "address": "2 Second St",
            "location": { "x": -73.03, "y": -36.81 },
            "optimal_order": 1
        }
    ]
}"#;

#[fixture]
fn plan_file() -> (TempDir, Utf8PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = Utf8PathBuf::from_path_buf(dir.path().join("plan.json"))
        .expect("temp path should be UTF-8");
    let mut file = std::fs::File::create(&path).expect("create plan file");
    file.write_all(SAMPLE_PLAN.as_bytes()).expect("write plan");
    (dir, path)
}

fn config_for(path: Utf8PathBuf) -> RenderConfig {
    RenderConfig {
        plan_path: path,
        osrm_base_url: None,
        fuel: FuelParams::default(),
    }
}

#[rstest]
fn config_requires_a_plan_path() {
    let err = RenderConfig::try_from(RenderArgs::default()).expect_err("no plan path given");
    assert!(matches!(err, CliError::MissingArgument { field: "plan", .. }));
}

#[rstest]
fn config_applies_default_fuel_parameters() {
    let args = RenderArgs {
        plan_path: Some(Utf8PathBuf::from("plan.json")),
        ..RenderArgs::default()
    };
    let config = RenderConfig::try_from(args).expect("plan path was given");
    assert_eq!(config.fuel, FuelParams::default());
    assert_eq!(config.osrm_base_url, None);
}

#[rstest]
fn config_rejects_non_positive_fuel_efficiency() {
    let args = RenderArgs {
        plan_path: Some(Utf8PathBuf::from("plan.json")),
        km_per_litre: Some(0.0),
        ..RenderArgs::default()
    };
    let err = RenderConfig::try_from(args).expect_err("zero efficiency is invalid");
    assert!(matches!(err, CliError::InvalidFuelParameters(_)));
}

#[rstest]
fn validate_sources_flags_a_missing_plan() {
    let config = config_for(Utf8PathBuf::from("/non-existent/plan.json"));
    let err = config.validate_sources().expect_err("plan does not exist");
    assert!(matches!(err, CliError::MissingSourceFile { field: "plan", .. }));
}

#[rstest]
fn load_plan_reports_unparseable_documents(
    #[from(plan_file)] (dir, _path): (TempDir, Utf8PathBuf),
) {
    let broken = Utf8PathBuf::from_path_buf(dir.path().join("broken.json"))
        .expect("temp path should be UTF-8");
    std::fs::write(&broken, b"not json").expect("write broken plan");

    let err = load_plan(&broken).expect_err("unparseable plan should fail");
    assert!(matches!(err, CliError::ParsePlan { .. }));
}

#[rstest]
fn load_plan_reports_missing_files() {
    let err = load_plan(Utf8PathBuf::from("/non-existent/plan.json").as_path())
        .expect_err("missing plan should fail");
    assert!(matches!(err, CliError::OpenPlan { .. }));
}

#[rstest]
fn report_orders_markers_and_skips_path_offline(
    #[from(plan_file)] (_dir, path): (TempDir, Utf8PathBuf),
) {
    let report =
        render_report(&config_for(path), &OfflineBuilder).expect("plan renders offline");

    let labels: Vec<&str> = report.markers.iter().map(|m| m.label.as_str()).collect();
    assert_eq!(labels, ["O", "1", "2", "F"]);
    assert_eq!(report.path, None);
    let request = report.request.expect("four positions form a route");
    assert_eq!(request.waypoints.len(), 2);
    assert!(report.estimate.distance_km > 0.0);
    assert_eq!(report.center, Coord { x: -73.050, y: -36.827 });
}

#[rstest]
fn report_attaches_the_fetched_path(
    #[from(plan_file)] (_dir, path): (TempDir, Utf8PathBuf),
) {
    let report =
        render_report(&config_for(path), &StraightLineBuilder).expect("plan renders with path");

    let drawn = report.path.expect("the stub service always draws");
    assert_eq!(drawn.len(), 4);
    // The path visits B (rank 1) before A (rank 2).
    assert_eq!(drawn[1], Coord { x: -73.03, y: -36.81 });
    assert_eq!(drawn[2], Coord { x: -73.02, y: -36.80 });
}

//! Behavioural tests for route assembly and bounds accumulation.

use geo::Coord;
use lastmile_core::{Bounds, assemble};
use rstest::rstest;

fn coord(x: f64, y: f64) -> Coord<f64> {
    Coord { x, y }
}

#[rstest]
fn endpoints_without_stops_route_with_zero_waypoints() {
    let plan = assemble(
        Some(coord(-73.050, -36.827)),
        &[],
        Some(coord(-73.06, -36.85)),
    );

    assert_eq!(plan.full_path.len(), 2);
    let request = plan.request.expect("two positions form a route");
    assert!(request.waypoints.is_empty());
}

#[rstest]
fn one_position_total_yields_no_routing_request() {
    let plan = assemble(Some(coord(-73.050, -36.827)), &[], None);
    assert_eq!(plan.request, None);
}

#[rstest]
fn bounds_match_known_extremes_and_ignore_insertion_order() {
    let positions = [coord(-73.0, -36.8), coord(-73.1, -36.9)];
    let mut reversed = positions;
    reversed.reverse();

    let forward_bounds = Bounds::from_positions(positions);
    let reverse_bounds = Bounds::from_positions(reversed);

    assert_eq!(forward_bounds, reverse_bounds);
    let rect = forward_bounds.rect().expect("positions were supplied");
    assert_eq!(rect.min(), coord(-73.1, -36.9));
    assert_eq!(rect.max(), coord(-73.0, -36.8));
}

#[rstest]
fn waypoints_preserve_stop_order_exactly() {
    let stops = [
        coord(-73.03, -36.81),
        coord(-73.02, -36.80),
        coord(-73.04, -36.82),
    ];
    let plan = assemble(
        Some(coord(-73.050, -36.827)),
        &stops,
        Some(coord(-73.06, -36.85)),
    );

    let request = plan.request.expect("five positions form a route");
    assert_eq!(request.waypoints, stops.to_vec());
}

//! Behavioural tests for delivery-point ordering and labelling.

use geo::Coord;
use lastmile_core::{DeliveryPoint, sequence};
use rstest::rstest;

fn point(name: &str, x: f64, y: f64) -> DeliveryPoint {
    DeliveryPoint::new(name, format!("{name} street"), Coord { x, y })
}

fn ranked_point(name: &str, x: f64, y: f64, rank: u32) -> DeliveryPoint {
    DeliveryPoint::with_order(name, format!("{name} street"), Coord { x, y }, rank)
}

#[rstest]
fn unranked_sequence_keeps_input_order_and_numbers_positionally() {
    let points = vec![
        point("north", -73.02, -36.80),
        point("centre", -73.05, -36.83),
        point("south", -73.06, -36.85),
    ];

    let stops = sequence(&points);

    let names: Vec<&str> = stops.iter().map(|s| s.point.name.as_str()).collect();
    assert_eq!(names, ["north", "centre", "south"]);
    let labels: Vec<&str> = stops.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, ["1", "2", "3"]);
}

#[rstest]
fn fully_ranked_sequence_sorts_by_rank_and_labels_with_it() {
    let points = vec![
        ranked_point("third", -73.02, -36.80, 3),
        ranked_point("first", -73.05, -36.83, 1),
        ranked_point("second", -73.06, -36.85, 2),
    ];

    let stops = sequence(&points);

    let names: Vec<&str> = stops.iter().map(|s| s.point.name.as_str()).collect();
    assert_eq!(names, ["first", "second", "third"]);
    let labels: Vec<&str> = stops.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, ["1", "2", "3"]);
}

#[rstest]
fn partially_ranked_sequence_puts_unranked_points_last_stably() {
    let points = vec![
        point("late-a", -73.01, -36.79),
        ranked_point("planned", -73.02, -36.80, 1),
        point("late-b", -73.03, -36.81),
    ];

    let stops = sequence(&points);

    let names: Vec<&str> = stops.iter().map(|s| s.point.name.as_str()).collect();
    assert_eq!(names, ["planned", "late-a", "late-b"]);
}

#[rstest]
fn gapped_ranks_keep_their_stored_labels() {
    let points = vec![
        ranked_point("a", -73.02, -36.80, 7),
        ranked_point("b", -73.03, -36.81, 2),
    ];

    let stops = sequence(&points);

    let labels: Vec<&str> = stops.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, ["2", "7"]);
}

#[rstest]
fn tooltips_surface_name_and_address() {
    let points = vec![point("Bakery", -73.02, -36.80)];
    let stops = sequence(&points);
    assert_eq!(stops[0].point.tooltip(), "Bakery - Bakery street");
}

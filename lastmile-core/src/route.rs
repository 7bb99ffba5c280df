//! Route assembly: from ordered positions to a routing request.
//!
//! Concatenates origin, delivery stops, and destination into the full path,
//! accumulates its bounding region, and derives the request for an external
//! directions provider when at least two positions exist.

use geo::Coord;

use crate::Bounds;

/// A request for an external directions provider.
///
/// Waypoints are required stops, not pass-throughs, and their order is
/// authoritative: providers must follow the sequence exactly as supplied and
/// must not re-optimise it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutingRequest {
    /// First position of the full path.
    pub origin: Coord<f64>,
    /// Last position of the full path.
    pub destination: Coord<f64>,
    /// Interior positions, in visit order.
    pub waypoints: Vec<Coord<f64>>,
}

/// The assembled route for one render cycle.
///
/// Produced fresh on every cycle and discarded afterwards; nothing here is
/// cached between renders.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutePlan {
    /// Origin, delivery stops, and destination, concatenated in order.
    pub full_path: Vec<Coord<f64>>,
    /// Bounding region over the full path.
    pub bounds: Bounds,
    /// Directions request; `None` when fewer than two positions exist.
    pub request: Option<RoutingRequest>,
}

/// Assemble the full path, its bounds, and the optional routing request.
///
/// Origin and destination are each independently optional; an absent one
/// simply contributes nothing to the path.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use lastmile_core::assemble;
///
/// let origin = Coord { x: -73.050, y: -36.827 };
/// let destination = Coord { x: -73.06, y: -36.85 };
/// let plan = assemble(Some(origin), &[], Some(destination));
///
/// assert_eq!(plan.full_path.len(), 2);
/// let request = plan.request.expect("two positions form a route");
/// assert_eq!(request.origin, origin);
/// assert_eq!(request.destination, destination);
/// assert!(request.waypoints.is_empty());
/// ```
#[must_use]
pub fn assemble(
    origin: Option<Coord<f64>>,
    stops: &[Coord<f64>],
    destination: Option<Coord<f64>>,
) -> RoutePlan {
    let full_path: Vec<Coord<f64>> = origin
        .into_iter()
        .chain(stops.iter().copied())
        .chain(destination)
        .collect();

    let bounds = Bounds::from_positions(full_path.iter().copied());

    let request = match full_path.as_slice() {
        [] | [_] => None,
        [first, interior @ .., last] => Some(RoutingRequest {
            origin: *first,
            destination: *last,
            waypoints: interior.to_vec(),
        }),
    };

    RoutePlan {
        full_path,
        bounds,
        request,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn coord(x: f64, y: f64) -> Coord<f64> {
        Coord { x, y }
    }

    #[rstest]
    fn empty_inputs_yield_no_request() {
        let plan = assemble(None, &[], None);
        assert!(plan.full_path.is_empty());
        assert!(plan.bounds.is_empty());
        assert_eq!(plan.request, None);
    }

    #[rstest]
    fn single_position_yields_no_request() {
        let plan = assemble(Some(coord(1.0, 1.0)), &[], None);
        assert_eq!(plan.full_path.len(), 1);
        assert_eq!(plan.request, None);
        // Markers can still be placed: the bounds are not empty.
        assert!(!plan.bounds.is_empty());
    }

    #[rstest]
    fn origin_and_destination_only_has_no_waypoints() {
        let plan = assemble(Some(coord(0.0, 0.0)), &[], Some(coord(1.0, 1.0)));
        let request = plan.request.expect("two positions form a route");
        assert!(request.waypoints.is_empty());
    }

    #[rstest]
    fn interior_stops_become_waypoints_in_order() {
        let stops = [coord(1.0, 1.0), coord(2.0, 2.0)];
        let plan = assemble(Some(coord(0.0, 0.0)), &stops, Some(coord(3.0, 3.0)));
        assert_eq!(plan.full_path.len(), 4);
        let request = plan.request.expect("four positions form a route");
        assert_eq!(request.origin, coord(0.0, 0.0));
        assert_eq!(request.destination, coord(3.0, 3.0));
        assert_eq!(request.waypoints, stops.to_vec());
    }

    #[rstest]
    fn stops_alone_can_form_a_route() {
        let stops = [coord(1.0, 1.0), coord(2.0, 2.0), coord(3.0, 3.0)];
        let plan = assemble(None, &stops, None);
        let request = plan.request.expect("three positions form a route");
        assert_eq!(request.origin, coord(1.0, 1.0));
        assert_eq!(request.destination, coord(3.0, 3.0));
        assert_eq!(request.waypoints, vec![coord(2.0, 2.0)]);
    }

    #[rstest]
    fn bounds_cover_the_full_path() {
        let plan = assemble(
            Some(coord(-73.050, -36.827)),
            &[coord(-73.02, -36.80)],
            Some(coord(-73.06, -36.85)),
        );
        let rect = plan.bounds.rect().expect("positions were supplied");
        assert_eq!(rect.min(), coord(-73.06, -36.85));
        assert_eq!(rect.max(), coord(-73.02, -36.80));
    }
}

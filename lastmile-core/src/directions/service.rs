//! Directions provider trait and drawable geometry alias.

use geo::Coord;

use crate::RoutingRequest;

use super::error::DirectionsError;

/// A drawable polyline in WGS84 lon/lat order.
pub type RouteGeometry = Vec<Coord<f64>>;

/// Fetch the drawable path for a routing request.
///
/// Implementers must visit the request's positions exactly in the supplied
/// order: origin, each waypoint, destination. Waypoints are required stops
/// and must never be re-optimised by the provider.
///
/// # Examples
///
/// ```rust
/// use geo::Coord;
/// use lastmile_core::{DirectionsError, DirectionsService, RouteGeometry, RoutingRequest};
///
/// /// Connects the requested positions with straight segments.
/// struct StraightLine;
///
/// impl DirectionsService for StraightLine {
///     fn fetch_route(
///         &self,
///         request: &RoutingRequest,
///     ) -> Result<RouteGeometry, DirectionsError> {
///         let mut path = vec![request.origin];
///         path.extend(request.waypoints.iter().copied());
///         path.push(request.destination);
///         Ok(path)
///     }
/// }
///
/// let request = RoutingRequest {
///     origin: Coord { x: 0.0, y: 0.0 },
///     destination: Coord { x: 1.0, y: 1.0 },
///     waypoints: Vec::new(),
/// };
/// let path = StraightLine.fetch_route(&request)?;
/// assert_eq!(path.len(), 2);
/// # Ok::<(), DirectionsError>(())
/// ```
pub trait DirectionsService {
    /// Return the drawable geometry for `request`, or the failure status.
    fn fetch_route(&self, request: &RoutingRequest) -> Result<RouteGeometry, DirectionsError>;
}

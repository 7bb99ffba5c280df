//! Test-only stub implementations of the directions seam, used by unit and
//! behaviour tests.

use crate::{DirectionsError, DirectionsService, RouteGeometry, RoutingRequest};

/// Deterministic `DirectionsService` that connects the requested positions
/// with straight segments.
#[derive(Default, Debug, Copy, Clone)]
pub struct StraightLineDirections;

impl DirectionsService for StraightLineDirections {
    fn fetch_route(&self, request: &RoutingRequest) -> Result<RouteGeometry, DirectionsError> {
        let mut path = Vec::with_capacity(request.waypoints.len() + 2);
        path.push(request.origin);
        path.extend(request.waypoints.iter().copied());
        path.push(request.destination);
        Ok(path)
    }
}

/// `DirectionsService` that always fails with a service status.
#[derive(Debug, Clone)]
pub struct FailingDirections {
    code: String,
}

impl FailingDirections {
    /// Build a stub that fails with the given provider status code.
    #[must_use]
    pub fn with_code(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

impl DirectionsService for FailingDirections {
    fn fetch_route(&self, _request: &RoutingRequest) -> Result<RouteGeometry, DirectionsError> {
        Err(DirectionsError::Service {
            code: self.code.clone(),
            message: String::from("stubbed failure"),
        })
    }
}

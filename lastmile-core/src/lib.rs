//! Core domain types and pipeline logic for the Lastmile delivery-route
//! visualisation engine.
//!
//! Given an optional origin, a set of delivery points with externally
//! supplied visit ranks, and an optional destination, the pipeline produces
//! a deterministic display order with human-visible labels, a bounding
//! region covering every displayed position, and a routing request for an
//! external directions provider. Everything here is synchronous and pure;
//! the only seam to the outside world is the [`DirectionsService`] trait.

mod bounds;
pub mod directions;
mod estimate;
mod order;
mod point;
mod render;
mod route;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use bounds::Bounds;
pub use directions::{DirectionsError, DirectionsService, RouteGeometry};
pub use estimate::{
    DEFAULT_KM_PER_LITRE, DEFAULT_PRICE_PER_LITRE, FuelParams, FuelParamsError, TripEstimate,
    estimate_trip,
};
pub use order::{SequencedStop, sequence};
pub use point::DeliveryPoint;
pub use render::{
    DEFAULT_CENTER, DisplayState, MapController, Marker, RenderFrame, RouteCompletion, center,
};
pub use route::{RoutePlan, RoutingRequest, assemble};

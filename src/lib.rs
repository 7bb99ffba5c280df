//! Facade crate for the Lastmile delivery-route visualisation engine.
//!
//! This crate re-exports the core pipeline types and exposes the HTTP
//! directions and removal adapters behind feature flags.

#![forbid(unsafe_code)]

pub use lastmile_core::{
    Bounds, DEFAULT_CENTER, DeliveryPoint, DirectionsError, DirectionsService, DisplayState,
    FuelParams, FuelParamsError, MapController, Marker, RenderFrame, RouteCompletion,
    RouteGeometry, RoutePlan, RoutingRequest, SequencedStop, TripEstimate, assemble, center,
    estimate_trip, sequence,
};

#[cfg(feature = "directions-http")]
pub use lastmile_directions::{
    AntiForgeryToken, HttpDirectionsService, HttpDirectionsServiceConfig, ProviderBuildError,
    RemovalClient, RemovalError,
};

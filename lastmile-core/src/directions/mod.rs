//! Fetch drawable route geometry from an external directions provider.
//!
//! The `DirectionsService` trait abstracts the provider behind a synchronous
//! interface so the core stays embeddable in synchronous contexts. Callers
//! supply a [`RoutingRequest`](crate::RoutingRequest) and receive either a
//! drawable polyline or a [`DirectionsError`]; that two-variant result is the
//! whole completion protocol, with no callbacks involved.

mod error;
mod service;

pub use error::DirectionsError;
pub use service::{DirectionsService, RouteGeometry};

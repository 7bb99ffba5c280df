//! HTTP adapters for the Lastmile delivery-route visualisation engine.
//!
//! Two boundary clients live here: [`HttpDirectionsService`], an OSRM-backed
//! implementation of the core's
//! [`DirectionsService`](lastmile_core::DirectionsService) seam, and
//! [`RemovalClient`], the fire-and-forget delete-endpoint caller with its
//! anti-forgery token resolution.

mod osrm;
mod provider;
mod removal;

pub use provider::{
    DEFAULT_USER_AGENT, HttpDirectionsService, HttpDirectionsServiceConfig, ProviderBuildError,
};
pub use removal::{AntiForgeryToken, RemovalClient, RemovalError, RemovalReply};

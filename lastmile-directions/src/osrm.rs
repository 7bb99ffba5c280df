//! OSRM API response types for the Route service.
//!
//! This module provides deserialisation types for the OSRM Route API
//! response format. The Route service finds the fastest route between the
//! supplied coordinates *in the supplied order*, which is what makes it the
//! right service for an authoritative waypoint sequence (the Trip service
//! re-optimises the order and must not be used here).
//!
//! See: <http://project-osrm.org/docs/v5.24.0/api/#route-service>

use serde::Deserialize;

/// OSRM Route API response.
///
/// The response contains one or more routes on success or an error message
/// on failure. The `code` field indicates the response status.
#[derive(Debug, Deserialize)]
pub struct RouteResponse {
    /// Status code from OSRM.
    ///
    /// Common values:
    /// - `"Ok"` - Request was successful
    /// - `"InvalidQuery"` - Invalid query parameters
    /// - `"NoRoute"` - No route between the supplied positions
    /// - `"NoSegment"` - A coordinate could not be matched to the network
    pub code: String,

    /// Optional error message when `code` is not `"Ok"`.
    pub message: Option<String>,

    /// Candidate routes, best first. Empty or absent on failure.
    #[serde(default)]
    pub routes: Vec<OsrmRoute>,
}

impl RouteResponse {
    /// Check if the response indicates success.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.code == "Ok"
    }
}

/// A single routed alternative.
#[derive(Debug, Deserialize)]
pub struct OsrmRoute {
    /// Drawable geometry, requested as GeoJSON.
    pub geometry: RouteGeometryPayload,
    /// Road distance in metres.
    #[serde(default)]
    pub distance: f64,
    /// Travel duration in seconds.
    #[serde(default)]
    pub duration: f64,
}

/// GeoJSON `LineString` payload carrying the drawable polyline.
///
/// Coordinates are `[longitude, latitude]` pairs.
#[derive(Debug, Deserialize)]
pub struct RouteGeometryPayload {
    /// Polyline vertices in `[lon, lat]` order.
    pub coordinates: Vec<[f64; 2]>,
}

//! HTTP-based `DirectionsService` using OSRM's Route API.
//!
//! This module provides [`HttpDirectionsService`], an implementation of the
//! [`DirectionsService`] trait that fetches drawable route geometry from an
//! OSRM routing service via HTTP.
//!
//! # Architecture
//!
//! The [`DirectionsService`] trait is synchronous to keep the core library
//! embeddable in synchronous contexts. This provider bridges the async HTTP
//! calls to the sync interface by blocking on a Tokio runtime internally.
//!
//! # Example
//!
//! ```no_run
//! use geo::Coord;
//! use lastmile_directions::HttpDirectionsService;
//! use lastmile_core::{DirectionsService, RoutingRequest};
//!
//! let service = HttpDirectionsService::new("http://localhost:5000")?;
//! let request = RoutingRequest {
//!     origin: Coord { x: -73.05, y: -36.82 },
//!     destination: Coord { x: -73.02, y: -36.80 },
//!     waypoints: Vec::new(),
//! };
//!
//! let path = service.fetch_route(&request)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::time::Duration;

use geo::Coord;
use lastmile_core::{DirectionsError, DirectionsService, RouteGeometry, RoutingRequest};
use reqwest::Client;
use tokio::runtime::{Handle, Runtime, RuntimeFlavor};
use url::Url;

use super::osrm::RouteResponse;

/// Error type for [`HttpDirectionsService`] construction failures.
#[derive(Debug)]
pub enum ProviderBuildError {
    /// The base URL could not be parsed.
    BaseUrl(url::ParseError),
    /// Failed to build the HTTP client.
    HttpClient(reqwest::Error),
    /// Failed to build the Tokio runtime.
    Runtime(std::io::Error),
}

impl std::fmt::Display for ProviderBuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BaseUrl(err) => write!(f, "invalid base URL: {err}"),
            Self::HttpClient(err) => write!(f, "failed to build HTTP client: {err}"),
            Self::Runtime(err) => write!(f, "failed to build Tokio runtime: {err}"),
        }
    }
}

impl std::error::Error for ProviderBuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::BaseUrl(err) => Some(err),
            Self::HttpClient(err) => Some(err),
            Self::Runtime(err) => Some(err),
        }
    }
}

/// Default user agent for OSRM requests.
pub const DEFAULT_USER_AGENT: &str = "lastmile-directions/0.1";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for [`HttpDirectionsService`].
#[derive(Debug, Clone)]
pub struct HttpDirectionsServiceConfig {
    /// Base URL for the OSRM service (e.g., `"http://localhost:5000"`).
    pub base_url: String,
    /// Request timeout duration.
    pub timeout: Duration,
    /// User agent string for requests.
    pub user_agent: String,
}

impl Default for HttpDirectionsServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl HttpDirectionsServiceConfig {
    /// Create a new configuration with the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// HTTP-based directions provider using OSRM's Route API.
///
/// This provider implements the synchronous [`DirectionsService`] trait by
/// internally blocking on asynchronous HTTP requests. It owns a Tokio
/// runtime that is reused across calls, avoiding the overhead of creating a
/// new runtime per request.
///
/// # Runtime behaviour
///
/// When called from outside any Tokio runtime, the provider uses its own
/// stored runtime. When called from within an existing multi-threaded Tokio
/// runtime it uses that runtime's handle with
/// [`tokio::task::block_in_place`] to avoid nested runtime panics; inside a
/// `current_thread` runtime it falls back to its own internal runtime.
///
/// # Waypoint order
///
/// The Route service visits coordinates in exactly the order supplied, so
/// the request's waypoint sequence is preserved verbatim. The Trip service,
/// which re-optimises stop order, is deliberately not used.
pub struct HttpDirectionsService {
    client: Client,
    config: HttpDirectionsServiceConfig,
    runtime: Runtime,
}

impl std::fmt::Debug for HttpDirectionsService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpDirectionsService")
            .field("client", &self.client)
            .field("config", &self.config)
            .field("runtime", &"<tokio::runtime::Runtime>")
            .finish()
    }
}

impl HttpDirectionsService {
    /// Create a new provider with default configuration.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL for the OSRM service (e.g., `"http://localhost:5000"`)
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client or
    /// Tokio runtime fails to build.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ProviderBuildError> {
        Self::with_config(HttpDirectionsServiceConfig::new(base_url))
    }

    /// Create a new provider with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client or
    /// Tokio runtime fails to build.
    pub fn with_config(config: HttpDirectionsServiceConfig) -> Result<Self, ProviderBuildError> {
        Url::parse(&config.base_url).map_err(ProviderBuildError::BaseUrl)?;
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(ProviderBuildError::HttpClient)?;
        let runtime = build_runtime().map_err(ProviderBuildError::Runtime)?;
        Ok(Self {
            client,
            config,
            runtime,
        })
    }

    /// Build the OSRM Route API URL for the given routing request.
    ///
    /// The URL format is:
    /// `{base_url}/route/v1/driving/{coordinates}?overview=full&geometries=geojson&steps=false`
    /// where coordinates are semicolon-separated `lon,lat` pairs in visit
    /// order: origin, each waypoint, destination.
    fn build_route_url(&self, request: &RoutingRequest) -> String {
        let coords: String = std::iter::once(&request.origin)
            .chain(request.waypoints.iter())
            .chain(std::iter::once(&request.destination))
            .map(|position| format!("{},{}", position.x, position.y))
            .collect::<Vec<_>>()
            .join(";");

        format!(
            "{}/route/v1/driving/{}?overview=full&geometries=geojson&steps=false",
            self.config.base_url.trim_end_matches('/'),
            coords
        )
    }

    /// Fetch the route geometry asynchronously.
    async fn fetch_route_async(
        &self,
        request: &RoutingRequest,
    ) -> Result<RouteGeometry, DirectionsError> {
        let url = self.build_route_url(request);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| self.convert_reqwest_error(&err, &url))?
            .error_for_status()
            .map_err(|err| self.convert_reqwest_error(&err, &url))?;

        let route_response: RouteResponse =
            response
                .json()
                .await
                .map_err(|err| DirectionsError::Parse {
                    message: err.to_string(),
                })?;

        Self::convert_response(route_response)
    }

    /// Convert a reqwest error to a `DirectionsError`.
    fn convert_reqwest_error(&self, error: &reqwest::Error, url: &str) -> DirectionsError {
        if error.is_timeout() {
            return DirectionsError::Timeout {
                url: url.to_owned(),
                timeout_secs: self.config.timeout.as_secs(),
            };
        }

        if let Some(status) = error.status() {
            return DirectionsError::Http {
                url: url.to_owned(),
                status: status.as_u16(),
                message: error.to_string(),
            };
        }

        DirectionsError::Network {
            url: url.to_owned(),
            message: error.to_string(),
        }
    }

    /// Convert an OSRM response to drawable geometry.
    ///
    /// The best (first) route wins; alternatives are ignored.
    fn convert_response(response: RouteResponse) -> Result<RouteGeometry, DirectionsError> {
        if !response.is_ok() {
            return Err(DirectionsError::Service {
                code: response.code,
                message: response.message.unwrap_or_default(),
            });
        }

        let route = response
            .routes
            .into_iter()
            .next()
            .ok_or_else(|| DirectionsError::Parse {
                message: "OSRM response missing routes array".to_string(),
            })?;

        Ok(route
            .geometry
            .coordinates
            .into_iter()
            .map(|[x, y]| Coord { x, y })
            .collect())
    }
}

impl DirectionsService for HttpDirectionsService {
    /// Fetch the drawable geometry for the given routing request.
    ///
    /// # Runtime requirements
    ///
    /// When called from within an existing Tokio runtime, the runtime must
    /// be multi-threaded (`flavor = "multi_thread"`). If called from within
    /// a `current_thread` runtime, the method falls back to using its own
    /// internal runtime, which may block the caller's runtime.
    fn fetch_route(&self, request: &RoutingRequest) -> Result<RouteGeometry, DirectionsError> {
        let future = self.fetch_route_async(request);
        block_on_bridged(&self.runtime, future)
    }
}

/// Build the current-thread runtime owned by the HTTP clients in this crate.
pub(crate) fn build_runtime() -> Result<Runtime, std::io::Error> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}

/// Block on `future`, reusing an ambient multi-threaded runtime when present.
///
/// `block_in_place` requires a multi-threaded runtime; for `current_thread`
/// runtimes (or none at all) the caller's stored runtime is used instead.
pub(crate) fn block_on_bridged<F: Future>(runtime: &Runtime, future: F) -> F::Output {
    match Handle::try_current() {
        Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
            tokio::task::block_in_place(|| handle.block_on(future))
        }
        // No runtime detected, or current_thread runtime: use our own runtime.
        _ => runtime.block_on(future),
    }
}

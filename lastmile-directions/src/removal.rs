//! Delivery-point removal boundary client.
//!
//! Removal is a fire-and-forget POST to a caller-supplied URL, guarded
//! upstream by a user confirmation step. The request carries an
//! anti-forgery token resolved from up to three sources; the server answers
//! with a structured `{ ok, error }` reply. A confirmed removal means the
//! caller should reload its state from scratch; anything else is surfaced
//! as an error with no retry.

use reqwest::Client;
use serde::Deserialize;
use tokio::runtime::Runtime;

use super::provider::{ProviderBuildError, block_on_bridged, build_runtime};

/// Placeholder emitted by templating layers when no token was injected.
const TOKEN_PLACEHOLDER: &str = "NOTPROVIDED";

/// An anti-forgery token accepted by the removal endpoints.
///
/// # Examples
/// ```
/// use lastmile_directions::AntiForgeryToken;
///
/// let token = AntiForgeryToken::resolve(Some("NOTPROVIDED"), None, Some("cookie-token"))
///     .expect("the stored credential is usable");
/// assert_eq!(token.as_str(), "cookie-token");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AntiForgeryToken(String);

impl AntiForgeryToken {
    /// Resolve a token by trying, in order: an injected token, a
    /// page-embedded token, then a stored credential.
    ///
    /// Injected and embedded values equal to the `"NOTPROVIDED"` placeholder
    /// (or empty) are skipped; an empty stored credential resolves to
    /// `None`.
    #[must_use]
    pub fn resolve(
        injected: Option<&str>,
        embedded: Option<&str>,
        stored: Option<&str>,
    ) -> Option<Self> {
        injected
            .filter(|token| Self::usable(token))
            .or(embedded.filter(|token| Self::usable(token)))
            .or(stored.filter(|token| !token.is_empty()))
            .map(|token| Self(token.to_owned()))
    }

    fn usable(token: &str) -> bool {
        !token.is_empty() && token != TOKEN_PLACEHOLDER
    }

    /// The resolved token value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Structured reply from a removal endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemovalReply {
    /// Whether the server confirmed the removal.
    pub ok: bool,
    /// Server-side error detail when `ok` is false.
    #[serde(default)]
    pub error: Option<String>,
}

/// Errors from [`RemovalClient::remove`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RemovalError {
    /// The endpoint answered with a non-success HTTP status.
    #[error("removal request to {url} failed with HTTP {status}")]
    Http {
        /// Request URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },
    /// The endpoint could not be reached.
    #[error("removal request to {url} failed: {message}")]
    Network {
        /// Request URL.
        url: String,
        /// Error detail from the HTTP client.
        message: String,
    },
    /// The reply was not a structured removal result.
    #[error("failed to parse removal reply: {message}")]
    Parse {
        /// Decoder error detail.
        message: String,
    },
    /// The server answered but did not confirm the removal.
    #[error("server did not confirm the removal: {message}")]
    Rejected {
        /// Server-side error detail, possibly empty.
        message: String,
    },
}

/// HTTP client for the removal endpoints.
///
/// One terminal outcome per call: `Ok(())` means the server confirmed and
/// the caller should reload its state; any error is final (no retry here).
pub struct RemovalClient {
    client: Client,
    runtime: Runtime,
}

impl std::fmt::Debug for RemovalClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemovalClient")
            .field("client", &self.client)
            .field("runtime", &"<tokio::runtime::Runtime>")
            .finish()
    }
}

impl RemovalClient {
    /// Create a removal client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client or Tokio runtime fails to build.
    pub fn new() -> Result<Self, ProviderBuildError> {
        let client = Client::builder()
            .build()
            .map_err(ProviderBuildError::HttpClient)?;
        let runtime = build_runtime().map_err(ProviderBuildError::Runtime)?;
        Ok(Self { client, runtime })
    }

    /// POST a removal to `url`, authenticating with `token`.
    ///
    /// # Errors
    ///
    /// Fails when the endpoint is unreachable, answers a non-success HTTP
    /// status, answers something unparseable, or answers `ok = false`.
    pub fn remove(&self, url: &str, token: &AntiForgeryToken) -> Result<(), RemovalError> {
        let future = self.remove_async(url, token);
        block_on_bridged(&self.runtime, future)
    }

    async fn remove_async(&self, url: &str, token: &AntiForgeryToken) -> Result<(), RemovalError> {
        let response = self
            .client
            .post(url)
            .header("X-CSRFToken", token.as_str())
            .header("X-Requested-With", "XMLHttpRequest")
            .send()
            .await
            .map_err(|err| RemovalError::Network {
                url: url.to_owned(),
                message: err.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemovalError::Http {
                url: url.to_owned(),
                status: status.as_u16(),
            });
        }

        let reply: RemovalReply = response.json().await.map_err(|err| RemovalError::Parse {
            message: err.to_string(),
        })?;

        Self::confirm(reply)
    }

    fn confirm(reply: RemovalReply) -> Result<(), RemovalError> {
        if reply.ok {
            return Ok(());
        }
        let message = reply.error.unwrap_or_default();
        log::error!("removal rejected by server: {message}");
        Err(RemovalError::Rejected { message })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn token_prefers_the_injected_source() {
        let token = AntiForgeryToken::resolve(Some("inj"), Some("meta"), Some("cookie"))
            .expect("injected token is usable");
        assert_eq!(token.as_str(), "inj");
    }

    #[rstest]
    fn token_skips_placeholder_and_empty_sources() {
        let token = AntiForgeryToken::resolve(Some("NOTPROVIDED"), Some(""), Some("cookie"))
            .expect("stored credential is usable");
        assert_eq!(token.as_str(), "cookie");
    }

    #[rstest]
    fn token_falls_back_to_the_embedded_source() {
        let token = AntiForgeryToken::resolve(None, Some("meta"), Some("cookie"))
            .expect("embedded token is usable");
        assert_eq!(token.as_str(), "meta");
    }

    #[rstest]
    fn token_resolution_can_fail() {
        assert_eq!(
            AntiForgeryToken::resolve(Some("NOTPROVIDED"), None, Some("")),
            None
        );
        assert_eq!(AntiForgeryToken::resolve(None, None, None), None);
    }

    #[rstest]
    fn reply_deserialises_with_and_without_error_detail() {
        let confirmed: RemovalReply =
            serde_json::from_str(r#"{ "ok": true }"#).expect("should deserialise");
        assert!(confirmed.ok);
        assert_eq!(confirmed.error, None);

        let rejected: RemovalReply =
            serde_json::from_str(r#"{ "ok": false, "error": "missing point" }"#)
                .expect("should deserialise");
        assert!(!rejected.ok);
        assert_eq!(rejected.error.as_deref(), Some("missing point"));
    }

    #[rstest]
    fn unconfirmed_reply_is_rejected() {
        let err = RemovalClient::confirm(RemovalReply {
            ok: false,
            error: Some("missing point".to_owned()),
        })
        .expect_err("should reject");
        assert!(matches!(err, RemovalError::Rejected { message } if message == "missing point"));
    }

    #[rstest]
    fn confirmed_reply_is_ok() {
        assert_eq!(
            RemovalClient::confirm(RemovalReply {
                ok: true,
                error: None,
            }),
            Ok(())
        );
    }
}

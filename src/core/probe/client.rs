//! Probe client implementations
//!
//! HTTP client abstraction for the reachability chain. Three request shapes:
//! status-readable HEAD/GET, opaque completion-only requests, and the image
//! beacon. The production client is built on isahc; tests inject mocks.

use crate::core::probe::types::{ProbeError, ProbeMethod};
use std::time::Duration;

use isahc::config::{Configurable, RedirectPolicy, SslOption};
use isahc::error::ErrorKind;
use isahc::{AsyncReadResponseExt, HttpClient, Request, ResponseExt};
use url::Url;

const USER_AGENT: &str = concat!("sitecheck/", env!("CARGO_PKG_VERSION"));

/// Status-readable response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeResponse {
    /// Final HTTP status code
    pub status_code: u16,
    /// Whether the final response was reached through a followed redirect
    pub redirected: bool,
}

/// HTTP client abstraction for dependency injection and testing
#[async_trait::async_trait]
pub trait ProbeClient: Send + Sync {
    /// Execute a status-readable request, bypassing caches
    ///
    /// # Returns
    /// * `Ok(ProbeResponse)` - a response was received (any status)
    /// * `Err(ProbeError)` - the request did not complete or its status cannot be read
    async fn request(
        &self,
        method: ProbeMethod,
        url: &str,
        follow_redirects: bool,
        timeout: Duration,
    ) -> Result<ProbeResponse, ProbeError>;

    /// Execute a request whose status is never surfaced
    ///
    /// `Ok(())` means the exchange completed; nothing else is observable.
    async fn opaque_request(&self, url: &str, timeout: Duration) -> Result<(), ProbeError>;

    /// Load an image resource
    ///
    /// `Ok(())` only when the resource loaded.
    async fn load_beacon(&self, url: &str, timeout: Duration) -> Result<(), ProbeError>;
}

/// Production probe client implementation using isahc
pub struct IsahcProbeClient {
    client: HttpClient,
}

impl IsahcProbeClient {
    pub fn new() -> Result<Self, ProbeError> {
        let client = HttpClient::builder()
            .redirect_policy(RedirectPolicy::None) // Per-request policy overrides this
            .build()
            .map_err(|e| ProbeError::Client(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl ProbeClient for IsahcProbeClient {
    async fn request(
        &self,
        method: ProbeMethod,
        url: &str,
        follow_redirects: bool,
        timeout: Duration,
    ) -> Result<ProbeResponse, ProbeError> {
        let builder = match method {
            ProbeMethod::Head => Request::head(url),
            ProbeMethod::Get => Request::get(url),
        };

        let policy = if follow_redirects {
            RedirectPolicy::Follow
        } else {
            RedirectPolicy::None
        };

        let request = builder
            .timeout(timeout)
            .redirect_policy(policy)
            .header("User-Agent", USER_AGENT)
            .header("Cache-Control", "no-cache")
            .header("Pragma", "no-cache")
            .body(())
            .map_err(|e| ProbeError::Restricted(format!("Request creation failed: {}", e)))?;

        let response = self
            .client
            .send_async(request)
            .await
            .map_err(|e| map_isahc_error(&e))?;

        let status_code = response.status().as_u16();
        let redirected = follow_redirects
            && response
                .effective_uri()
                .map(|uri| !same_location(url, &uri.to_string()))
                .unwrap_or(false);

        // Body is not needed for reachability; dropping the response closes it
        Ok(ProbeResponse {
            status_code,
            redirected,
        })
    }

    async fn opaque_request(&self, url: &str, timeout: Duration) -> Result<(), ProbeError> {
        let request = Request::get(url)
            .timeout(timeout)
            .redirect_policy(RedirectPolicy::Follow)
            .ssl_options(SslOption::DANGER_ACCEPT_INVALID_CERTS | SslOption::DANGER_ACCEPT_INVALID_HOSTS)
            .header("User-Agent", USER_AGENT)
            .header("Cache-Control", "no-cache")
            .body(())
            .map_err(|e| ProbeError::Restricted(format!("Request creation failed: {}", e)))?;

        // Completion is the only signal; the status stays unread
        self.client
            .send_async(request)
            .await
            .map(|_| ())
            .map_err(|e| map_isahc_error(&e))
    }

    async fn load_beacon(&self, url: &str, timeout: Duration) -> Result<(), ProbeError> {
        let request = Request::get(url)
            .timeout(timeout)
            .redirect_policy(RedirectPolicy::Follow)
            .header("User-Agent", USER_AGENT)
            .header("Accept", "image/*")
            .body(())
            .map_err(|e| ProbeError::NotLoaded(format!("Beacon request creation failed: {}", e)))?;

        let mut response = self
            .client
            .send_async(request)
            .await
            .map_err(|e| map_isahc_error(&e))?;

        let status_code = response.status().as_u16();
        if !(200..300).contains(&status_code) {
            return Err(ProbeError::NotLoaded(format!("HTTP {}", status_code)));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ProbeError::NotLoaded(format!("Failed to read beacon body: {}", e)))?;

        if body.is_empty() {
            return Err(ProbeError::NotLoaded("empty resource".to_string()));
        }

        Ok(())
    }
}

/// Map isahc failures onto the probe error taxonomy
fn map_isahc_error(error: &isahc::Error) -> ProbeError {
    match error.kind() {
        ErrorKind::Timeout => ProbeError::Timeout,
        ErrorKind::NameResolution | ErrorKind::ConnectionFailed | ErrorKind::Io => {
            ProbeError::Network(error.to_string())
        }
        ErrorKind::BadServerCertificate
        | ErrorKind::BadClientCertificate
        | ErrorKind::TlsEngine
        | ErrorKind::TooManyRedirects
        | ErrorKind::InvalidRequest
        | ErrorKind::RequestBodyNotRewindable => ProbeError::Restricted(error.to_string()),
        ErrorKind::ClientInitialization => ProbeError::Client(error.to_string()),
        _ => ProbeError::Network(error.to_string()),
    }
}

/// Compare two locations after URL normalization (trailing slash, default port)
fn same_location(requested: &str, effective: &str) -> bool {
    match (Url::parse(requested), Url::parse(effective)) {
        (Ok(a), Ok(b)) => a == b,
        _ => requested == effective,
    }
}

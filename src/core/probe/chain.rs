/*!
Reachability strategy chain.

One logical probe per call, internally falling back through up to four steps:

1. **Primary**: HEAD (or GET with `prefer_get`) honoring the redirect policy, bypassing caches
2. **Method retry**: HEAD answered 404/405/501 → one GET with the same redirect policy;
   if the retry fails the HEAD response is kept
3. **Opaque**: primary failed → completion-only request, status unavailable
4. **Beacon**: opaque failed → load the origin's favicon within a bounded wait

The chain stops at the first step that yields a classifiable outcome and never
returns an error: every failure path ends in a [`ProbeOutcome`].
*/

use crate::core::probe::client::ProbeClient;
use crate::core::probe::debug_logger::get_debug_logger;
use crate::core::probe::types::{ProbeError, ProbeMethod, ProbeOutcome, ProbeTarget, BEACON_TIMEOUT};
use crate::core::probe::url::build_beacon_url;
use std::sync::Arc;
use std::time::Duration;

/// Status codes that signal the server does not support HEAD
pub const METHOD_NOT_SUPPORTED: [u16; 3] = [404, 405, 501];

/// Ordered fallback chain over an injected [`ProbeClient`]
#[derive(Clone)]
pub struct ProbeChain {
    client: Arc<dyn ProbeClient>,
    beacon_timeout: Duration,
}

impl ProbeChain {
    pub fn new(client: Arc<dyn ProbeClient>) -> Self {
        Self {
            client,
            beacon_timeout: BEACON_TIMEOUT,
        }
    }

    /// Override the beacon wait (for testing)
    pub fn with_beacon_timeout(mut self, timeout: Duration) -> Self {
        self.beacon_timeout = timeout;
        self
    }

    /// Run the chain against `target`
    ///
    /// The target URL is expected to be validated already; an invalid URL simply
    /// fails every step and ends as a network failure.
    pub async fn probe(&self, target: &ProbeTarget) -> ProbeOutcome {
        let debug_logger = get_debug_logger();
        let url = target.url.trim();
        let timeout = target.request_timeout();
        let method = if target.prefer_get {
            ProbeMethod::Get
        } else {
            ProbeMethod::Head
        };

        // Step 1: primary request
        let primary_err = match self
            .client
            .request(method, url, target.follow_redirects, timeout)
            .await
        {
            Ok(response) => {
                debug_logger.probe_step("primary", &format!("{} {}", method, response.status_code));

                if method == ProbeMethod::Head
                    && METHOD_NOT_SUPPORTED.contains(&response.status_code)
                {
                    // Step 2: method retry
                    return match self
                        .client
                        .request(ProbeMethod::Get, url, target.follow_redirects, timeout)
                        .await
                    {
                        Ok(retry) => {
                            debug_logger.probe_step("method_retry", &format!("GET {}", retry.status_code));
                            ProbeOutcome::http(
                                retry.status_code,
                                retry.redirected,
                                format!("HEAD {}, GET {}", response.status_code, retry.status_code),
                            )
                        }
                        Err(err) => {
                            debug_logger.probe_step("method_retry", &format!("GET failed: {}", err));
                            ProbeOutcome::http(
                                response.status_code,
                                response.redirected,
                                format!("HEAD {}, GET retry failed: {}", response.status_code, err),
                            )
                        }
                    };
                }

                return ProbeOutcome::http(
                    response.status_code,
                    response.redirected,
                    format!("{} {}", method, response.status_code),
                );
            }
            Err(err) => {
                debug_logger.probe_step("primary", &format!("{} failed: {}", method, err));
                err
            }
        };

        // Step 3: opaque fallback
        let opaque_err = match self.client.opaque_request(url, timeout).await {
            Ok(()) => {
                debug_logger.probe_step("opaque", "completed");
                return ProbeOutcome::opaque(format!(
                    "opaque probe completed after {} failed: {}",
                    method, primary_err
                ));
            }
            Err(err) => {
                debug_logger.probe_step("opaque", &format!("failed: {}", err));
                err
            }
        };

        // Step 4: image beacon
        self.beacon_step(url, method, &primary_err, &opaque_err).await
    }

    async fn beacon_step(
        &self,
        url: &str,
        method: ProbeMethod,
        primary_err: &ProbeError,
        opaque_err: &ProbeError,
    ) -> ProbeOutcome {
        let debug_logger = get_debug_logger();
        let trail = format!("{} failed: {}; opaque failed: {}", method, primary_err, opaque_err);

        let beacon_url = match build_beacon_url(url) {
            Ok(beacon_url) => beacon_url,
            Err(err) => {
                debug_logger.probe_step("beacon", &format!("skipped: {}", err));
                return ProbeOutcome::network_failure(format!("{}; beacon skipped: {}", trail, err));
            }
        };

        let result = tokio::time::timeout(
            self.beacon_timeout,
            self.client.load_beacon(&beacon_url, self.beacon_timeout),
        )
        .await
        .unwrap_or(Err(ProbeError::Timeout));

        match result {
            Ok(()) => {
                debug_logger.probe_step("beacon", &format!("loaded {}", beacon_url));
                ProbeOutcome::beacon(true, format!("{}; beacon loaded", trail))
            }
            // Load errors and timeouts alike only tell us verification failed
            Err(err) => {
                debug_logger.probe_step("beacon", &format!("not loaded: {}", err));
                ProbeOutcome::beacon(false, format!("{}; beacon failed: {}", trail, err))
            }
        }
    }
}

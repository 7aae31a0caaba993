//! Authenticated HTTP client for the remote service.
//!
//! All accounts share one underlying `reqwest::Client` configured to look
//! like real Chrome traffic. The anti-bot layer in front of the service
//! rejects requests with bare-library fingerprints or missing browser
//! headers before they ever reach application logic, so the header set here
//! is a correctness requirement, not decoration.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, ORIGIN, REFERER, USER_AGENT};
use std::time::Duration;

use vigil_types::models::BASE_PROXY;
use vigil_types::ApiError;

/// Per-request timeout, matching the remote service's own limits.
pub const CALL_TIMEOUT: Duration = Duration::from_secs(60);

/// Fixed browser identity presented on every call.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/130.0.0.0 Safari/537.36";

const ACCEPT_LANGUAGE_VALUE: &str = "en-US,en;q=0.9";
const REFERER_VALUE: &str = "https://app.nodepay.ai/";
const ORIGIN_VALUE: &str = "chrome-extension://lgmpfmgeabnnlemejacfljbmonaomfmm";

/// Shared API client. Cheap to clone; all clones reuse the same connection
/// pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
}

impl ApiClient {
    /// Build the shared client, optionally routing all traffic (HTTP and
    /// HTTPS alike) through `proxy`.
    ///
    /// The base-proxy sentinel and empty strings mean "direct connection";
    /// anything else must parse as a proxy URL.
    pub fn new(proxy: Option<&str>) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder()
            .timeout(CALL_TIMEOUT)
            .tcp_nodelay(true)
            .default_headers(browser_headers());

        if let Some(value) = proxy.filter(|p| !p.is_empty() && *p != BASE_PROXY) {
            let proxy = reqwest::Proxy::all(value)
                .map_err(|e| ApiError::InvalidProxy { message: e.to_string() })?;
            builder = builder.proxy(proxy);
        }

        let http = builder
            .build()
            .map_err(|e| ApiError::ClientBuild { message: e.to_string() })?;

        Ok(Self { http })
    }

    /// POST `payload` to `url` with a bearer authorization derived from
    /// `token`, returning the parsed JSON body verbatim.
    ///
    /// Any transport error, non-2xx status, or unparseable body collapses
    /// into the uniform [`ApiError::CallFailed`]; the underlying cause is
    /// logged here and nowhere else.
    pub async fn call(
        &self,
        url: &str,
        payload: &serde_json::Value,
        token: &str,
    ) -> Result<serde_json::Value, ApiError> {
        let failed = || ApiError::CallFailed { url: url.to_string() };

        let response = self
            .http
            .post(url)
            .bearer_auth(token)
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("[ApiClient] Request to {} failed: {}", url, e);
                failed()
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!("[ApiClient] {} returned status {}", url, status);
            return Err(failed());
        }

        response.json::<serde_json::Value>().await.map_err(|e| {
            tracing::error!("[ApiClient] Unparseable body from {}: {}", url, e);
            failed()
        })
    }
}

/// Browser-identifying header set attached to every request.
fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(ACCEPT_LANGUAGE_VALUE));
    headers.insert(REFERER, HeaderValue::from_static(REFERER_VALUE));
    headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
    headers.insert(ORIGIN, HeaderValue::from_static(ORIGIN_VALUE));
    headers
}

/// Request/response gateway for the National Flood Data API.
///
/// `FloodApiClient::do_request` turns (method, path, query, body) into one
/// HTTP exchange against the configured base URL and classifies the result:
/// - status < 400: the full body is returned unmodified with status and headers,
/// - status >= 400: the body is probed for a JSON `message` and the status is
///   mapped to an `ApiError`; the body is never returned as data,
/// - no status at all: `FloodApiError::Transport`.
///
/// Every request carries the `x-api-key` credential header and
/// `Content-Type: application/json`.
///
/// The client holds only read-only state and the underlying blocking
/// `reqwest` client is `Send + Sync`, so one instance can serve concurrent
/// calls from many threads.

use reqwest::blocking::Client;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Method, StatusCode, Url};
use serde::Deserialize;
use std::fmt;
use std::time::Duration;
use tracing::debug;

use crate::config::ClientConfig;
use crate::model::{ApiError, FloodApiError, QueryParams, ResponseMeta};

/// Production endpoint of the v3 API.
pub const DEFAULT_BASE_URL: &str = "https://api.nationalflooddata.com/v3";

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-api-key";

// ---------------------------------------------------------------------------
// Raw response
// ---------------------------------------------------------------------------

/// A successful (status < 400) exchange with its body fully buffered.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    /// Final URL after redirects.
    pub url: Url,
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Body as text, replacing invalid UTF-8.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Error payload shape. Only `message` is used; the HTTP status line decides
/// the error kind.
#[derive(Deserialize)]
struct ErrorPayload {
    #[serde(default)]
    message: Option<String>,
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// Typed client for one API account.
#[derive(Clone)]
pub struct FloodApiClient {
    base_url: String,
    api_key: String,
    api_key_header: HeaderValue,
    http: Client,
}

impl fmt::Debug for FloodApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FloodApiClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl FloodApiClient {
    /// Client for the production endpoint with no request timeout.
    pub fn new(api_key: impl Into<String>) -> Result<Self, FloodApiError> {
        Self::from_config(&ClientConfig::new(api_key))
    }

    /// Client built from a loaded configuration.
    pub fn from_config(config: &ClientConfig) -> Result<Self, FloodApiError> {
        let http = Client::builder()
            .timeout(config.timeout_secs.map(Duration::from_secs))
            .build()
            .map_err(FloodApiError::ClientBuild)?;
        Self::with_http_client(&config.base_url, &config.api_key, http)
    }

    /// Client using a caller-supplied transport, e.g. one with proxies,
    /// custom TLS roots or its own timeouts.
    pub fn with_http_client(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        http: Client,
    ) -> Result<Self, FloodApiError> {
        let api_key = api_key.into();
        let mut api_key_header =
            HeaderValue::from_str(&api_key).map_err(|_| FloodApiError::InvalidApiKey)?;
        api_key_header.set_sensitive(true);

        Ok(Self {
            base_url: base_url.into(),
            api_key,
            api_key_header,
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Joins `path` onto the base URL and appends the encoded query.
    pub fn build_url(&self, path: &str, query: Option<&QueryParams>) -> Result<Url, FloodApiError> {
        let endpoint = format!("{}{}", self.base_url.trim_end_matches('/'), path);
        let mut url = Url::parse(&endpoint).map_err(|source| FloodApiError::InvalidEndpoint {
            url: endpoint.clone(),
            source,
        })?;

        if let Some(query) = query.filter(|q| !q.is_empty()) {
            url.set_query(Some(&encode_query(query)));
        }
        Ok(url)
    }

    /// Executes one request and classifies the outcome.
    ///
    /// # Errors
    /// - `InvalidEndpoint` / `InvalidMethod` - before any network I/O.
    /// - `Transport` - no response was received.
    /// - `BodyRead` - the body could not be read in full.
    /// - `Api` - status >= 400, classified by `ApiErrorKind::from_status`.
    pub fn do_request(
        &self,
        method: &str,
        path: &str,
        query: Option<&QueryParams>,
        body: Option<Vec<u8>>,
    ) -> Result<RawResponse, FloodApiError> {
        let url = self.build_url(path, query)?;
        let method = Method::from_bytes(method.as_bytes())
            .map_err(|_| FloodApiError::InvalidMethod(method.to_string()))?;

        let mut request = self
            .http
            .request(method.clone(), url.clone())
            .header(API_KEY_HEADER, self.api_key_header.clone())
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(body) = body.filter(|b| !b.is_empty()) {
            request = request.body(body);
        }

        debug!(%method, %url, "sending request");
        let response = request.send().map_err(FloodApiError::Transport)?;

        let status = response.status();
        let headers = response.headers().clone();
        let final_url = response.url().clone();
        let body = response
            .bytes()
            .map_err(|source| FloodApiError::BodyRead {
                status: status.as_u16(),
                source,
            })?
            .to_vec();

        if status.as_u16() >= 400 {
            let meta = ResponseMeta {
                method,
                url: final_url,
                status,
                headers,
            };
            let err = api_error_from_body(meta, &body);
            debug!(status = err.status, kind = ?err.kind, message = %err.message, "API returned an error");
            return Err(err.into());
        }

        Ok(RawResponse {
            status,
            headers,
            url: final_url,
            body,
        })
    }
}

/// Encodes query parameters in key order.
fn encode_query(query: &QueryParams) -> String {
    query
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Builds the error for a >= 400 response. A body that is not JSON, or has
/// no usable `message`, falls back to the status line's reason phrase.
fn api_error_from_body(meta: ResponseMeta, body: &[u8]) -> ApiError {
    let fallback = meta.status.canonical_reason().unwrap_or_default();
    let message = serde_json::from_slice::<ErrorPayload>(body)
        .ok()
        .and_then(|p| p.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string());
    ApiError::new(meta.status.as_u16(), message, Some(meta))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

/// Error types for the National Flood Data client.
///
/// Every failure is returned to the caller as a `FloodApiError`. HTTP-level
/// failures (status >= 400) carry an `ApiError` whose `ApiErrorKind` is
/// selected from the status code alone, see `ApiErrorKind::from_status`.

use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode, Url};
use std::fmt;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Status classification
// ---------------------------------------------------------------------------

/// Classification of an HTTP error status returned by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    /// 400: malformed or incomplete query.
    BadRequest,
    /// 401: missing or rejected API key.
    Authentication,
    /// 402: the account has no data available for this request.
    NoDataAvailable,
    /// 404: the address or coordinates could not be located.
    LocationNotFound,
    /// 405: no parcel matched the location.
    ParcelNotFound,
    /// 500: upstream failure.
    InternalServer,
    /// Any other status >= 400; status and message are passed through as-is.
    Unclassified,
}

/// Status codes with a dedicated kind. Anything not listed is `Unclassified`.
const STATUS_KINDS: [(u16, ApiErrorKind); 6] = [
    (400, ApiErrorKind::BadRequest),
    (401, ApiErrorKind::Authentication),
    (402, ApiErrorKind::NoDataAvailable),
    (404, ApiErrorKind::LocationNotFound),
    (405, ApiErrorKind::ParcelNotFound),
    (500, ApiErrorKind::InternalServer),
];

impl ApiErrorKind {
    /// Maps an HTTP status code to its error kind.
    pub fn from_status(status: u16) -> Self {
        STATUS_KINDS
            .iter()
            .find(|(code, _)| *code == status)
            .map(|(_, kind)| *kind)
            .unwrap_or(ApiErrorKind::Unclassified)
    }

    fn label(self) -> Option<&'static str> {
        match self {
            ApiErrorKind::BadRequest => Some("Invalid request"),
            ApiErrorKind::Authentication => Some("Authentication error"),
            ApiErrorKind::NoDataAvailable => Some("No data available"),
            ApiErrorKind::LocationNotFound => Some("Location not found"),
            ApiErrorKind::ParcelNotFound => Some("Parcel not found"),
            ApiErrorKind::InternalServer => Some("Internal server error"),
            ApiErrorKind::Unclassified => None,
        }
    }
}

// ---------------------------------------------------------------------------
// HTTP error envelope
// ---------------------------------------------------------------------------

/// Request/response metadata kept for diagnostics once the body is consumed.
#[derive(Debug, Clone)]
pub struct ResponseMeta {
    pub method: Method,
    pub url: Url,
    pub status: StatusCode,
    pub headers: HeaderMap,
}

/// An HTTP error status returned by the API.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub status: u16,
    pub message: String,
    pub response: Option<ResponseMeta>,
}

impl ApiError {
    /// Classifies `status` and builds the error envelope around it.
    pub fn new(status: u16, message: impl Into<String>, response: Option<ResponseMeta>) -> Self {
        Self {
            kind: ApiErrorKind::from_status(status),
            status,
            message: message.into(),
            response,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(label) = self.kind.label() {
            return write!(f, "{}: {}", label, self.message);
        }
        match &self.response {
            Some(meta) => write!(f, "{} {}: {} {}", meta.method, meta.url, self.status, self.message),
            None => write!(f, "{} {}", self.status, self.message),
        }
    }
}

impl std::error::Error for ApiError {}

// ---------------------------------------------------------------------------
// Client error
// ---------------------------------------------------------------------------

/// Every way a client operation can fail.
#[derive(Debug, Error)]
pub enum FloodApiError {
    /// Base URL and path do not form a valid absolute URL.
    #[error("invalid endpoint URL {url:?}: {source}")]
    InvalidEndpoint {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The API key cannot be sent as an HTTP header value.
    #[error("API key contains characters that are not allowed in an HTTP header")]
    InvalidApiKey,

    /// The underlying HTTP client could not be built (e.g. TLS backend setup).
    #[error("building HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// The method string is not a valid HTTP token.
    #[error("creating request: invalid HTTP method {0:?}")]
    InvalidMethod(String),

    /// Connection, TLS, timeout or other transport failure before a status was received.
    #[error("request error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The status line arrived but the body could not be read in full.
    #[error("reading response body (status {status}): {source}")]
    BodyRead {
        status: u16,
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a status >= 400.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The success body is not JSON, so it cannot be sanitized.
    #[error("error unmarshalling JSON: {0}")]
    Sanitize(#[source] serde_json::Error),

    /// A request body or sanitized tree could not be serialized.
    #[error("error marshalling JSON: {0}")]
    Encode(#[source] serde_json::Error),

    /// JSON that does not fit the expected record.
    #[error("json unmarshal {target}: {source}")]
    Decode {
        target: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Valid JSON that is not a recognizable API response.
    #[error("invalid response from API: no status, no matchType, or no request: {raw}")]
    InvalidResponse { raw: String },
}

impl FloodApiError {
    /// Returns the classified API error, if this failure came from an HTTP status.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            FloodApiError::Api(e) => Some(e),
            _ => None,
        }
    }

    /// Shorthand for `api_error().map(|e| e.kind)`.
    pub fn api_kind(&self) -> Option<ApiErrorKind> {
        self.api_error().map(|e| e.kind)
    }

    /// True for network-level failures: no response at all, or a response
    /// whose body was cut off while being read.
    pub fn is_transport(&self) -> bool {
        matches!(self, FloodApiError::Transport(_) | FloodApiError::BodyRead { .. })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

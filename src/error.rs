//! Error types for the DataGSM SDK.
//!
//! Every fallible operation in this crate returns [`Error`]. Transport
//! failures, decoding failures, and server-reported failures are distinct
//! variants so callers can match on them without inspecting strings.

use thiserror::Error;

/// Result type used throughout the SDK.
pub type Result<T> = std::result::Result<T, Error>;

/// Refinement of a server-reported error by HTTP status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// 400 — malformed or invalid request parameters.
    BadRequest,
    /// 401 — missing or invalid API key.
    Unauthorized,
    /// 403 — the API key lacks permission for the resource.
    Forbidden,
    /// 404 — resource not found.
    NotFound,
    /// 429 — rate limit exceeded.
    RateLimited,
    /// 5xx — server-side failure.
    Server,
    /// Any other non-success status.
    Other,
}

impl ApiErrorKind {
    /// Classify an HTTP status code.
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => Self::BadRequest,
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            429 => Self::RateLimited,
            500..=599 => Self::Server,
            _ => Self::Other,
        }
    }
}

/// Errors surfaced by the DataGSM client.
#[derive(Debug, Error)]
pub enum Error {
    /// Caller input rejected locally. No network call was made.
    #[error("invalid request: {0}")]
    Validation(String),

    /// Connection, DNS, or protocol failure while talking to the service.
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The request deadline elapsed before a response arrived.
    #[error("request timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    /// A request value could not be encoded to the wire format.
    #[error("failed to encode request: {0}")]
    Serialization(String),

    /// A success response did not match the documented schema.
    #[error("unexpected response shape: {message}")]
    SchemaMismatch {
        /// What failed to decode.
        message: String,
        /// The offending response body, for diagnostics.
        body: String,
    },

    /// The server reported a failure (status >= 400).
    #[error("[{status}] {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Coarse classification of the status.
        kind: ApiErrorKind,
        /// Message from the error body when present, otherwise the raw text
        /// or the status line.
        message: String,
        /// Parsed error body, when the server sent JSON.
        body: Option<serde_json::Value>,
    },
}

impl Error {
    /// Build an [`Error::Api`] from a status code and message.
    pub fn api(status: u16, message: impl Into<String>, body: Option<serde_json::Value>) -> Self {
        Self::Api {
            status,
            kind: ApiErrorKind::from_status(status),
            message: message.into(),
            body,
        }
    }

    /// Build an [`Error::SchemaMismatch`] keeping the offending body.
    pub fn schema_mismatch(message: impl Into<String>, body: impl Into<String>) -> Self {
        Self::SchemaMismatch {
            message: message.into(),
            body: body.into(),
        }
    }

    /// HTTP status associated with this error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether this error was raised before any network I/O happened.
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Serialization(_))
    }

    /// Map a reqwest failure onto the SDK taxonomy.
    ///
    /// Timeouts get their own variant; everything else from the transport is
    /// a network failure.
    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err)
        } else {
            Self::Network(err)
        }
    }
}

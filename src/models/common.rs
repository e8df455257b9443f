//! Common response envelope.

use serde::{Deserialize, Serialize};

/// Envelope wrapping every DataGSM response payload.
///
/// The service always answers `{status, code, message, data}`, with the
/// operation-specific payload under `data`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    /// Response status label, e.g. `"success"`.
    pub status: String,
    /// HTTP status code echoed in the body.
    pub code: u16,
    /// Human-readable response message.
    pub message: String,
    /// Operation payload; `null` on empty responses.
    pub data: Option<T>,
}

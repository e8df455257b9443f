//! HTTP transport for the DataGSM API.
//!
//! One pooled `reqwest::Client` serves all calls; the API key rides on every
//! request as `X-API-KEY`. The transport performs no retries and keeps no
//! per-call state, so it is safe to share across tasks behind an `Arc`.

use reqwest::header::{ACCEPT, USER_AGENT};
use secrecy::{ExposeSecret, SecretString};

use crate::codec::QueryPairs;
use crate::error::{Error, Result};

/// Header carrying the API key.
pub(crate) const API_KEY_HEADER: &str = "X-API-KEY";

const SDK_USER_AGENT: &str = concat!("datagsm-openapi-sdk-rust/", env!("CARGO_PKG_VERSION"));

pub(crate) struct HttpTransport {
    http_client: reqwest::Client,
    base_url: String,
    api_key: SecretString,
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The key never appears in Debug output.
        f.debug_struct("HttpTransport")
            .field("base_url", &self.base_url)
            .field("has_api_key", &true)
            .finish()
    }
}

impl HttpTransport {
    pub(crate) fn new(http_client: reqwest::Client, base_url: &str, api_key: SecretString) -> Self {
        Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue an authenticated GET and return the raw success body.
    ///
    /// Non-success statuses are classified into [`Error::Api`]; transport
    /// failures into [`Error::Network`] / [`Error::Timeout`].
    pub(crate) async fn get(&self, path: &str, query: &QueryPairs) -> Result<String> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, params = query.as_slice().len(), "sending request");

        let mut request = self
            .http_client
            .get(&url)
            .header(API_KEY_HEADER, self.api_key.expose_secret())
            .header(ACCEPT, "application/json")
            .header(USER_AGENT, SDK_USER_AGENT);
        if !query.is_empty() {
            request = request.query(query.as_slice());
        }

        let response = request.send().await.map_err(Error::from_reqwest)?;
        let status = response.status();
        let body = response.text().await.map_err(Error::from_reqwest)?;
        tracing::debug!(path, status = status.as_u16(), "received response");

        if status.is_success() {
            Ok(body)
        } else {
            Err(classify_status(
                status.as_u16(),
                &body,
                status.canonical_reason(),
            ))
        }
    }
}

/// Build an [`Error::Api`] from a non-success response.
///
/// The message comes from the error body's `message` field when the body is
/// the documented JSON shape, else from the raw text, else from the status
/// line.
fn classify_status(status: u16, body_text: &str, reason: Option<&str>) -> Error {
    let body: Option<serde_json::Value> = serde_json::from_str(body_text).ok();
    let message = body
        .as_ref()
        .and_then(|b| b.get("message"))
        .and_then(|m| m.as_str())
        .map(str::to_owned)
        .unwrap_or_else(|| {
            if body_text.is_empty() {
                format!("HTTP {} {}", status, reason.unwrap_or("error"))
            } else {
                body_text.to_string()
            }
        });
    Error::api(status, message, body)
}

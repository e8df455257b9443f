//! Wire encoding and decoding.
//!
//! The service speaks camelCase query parameters and wraps every JSON
//! response in a common envelope. [`QueryPairs`] handles the outgoing side
//! (ISO dates, lowercase booleans, absent parameters omitted) and
//! [`decode_envelope`] the incoming side.

use chrono::NaiveDate;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::models::ApiEnvelope;

/// A value that can be rendered as a query-string parameter.
pub(crate) trait QueryValue {
    fn encode(&self) -> String;
}

impl QueryValue for bool {
    fn encode(&self) -> String {
        // The service expects lowercase literals.
        if *self { "true".into() } else { "false".into() }
    }
}

impl QueryValue for NaiveDate {
    fn encode(&self) -> String {
        self.format("%Y-%m-%d").to_string()
    }
}

impl QueryValue for &str {
    fn encode(&self) -> String {
        (*self).to_string()
    }
}

impl QueryValue for String {
    fn encode(&self) -> String {
        self.clone()
    }
}

macro_rules! impl_query_value_via_display {
    ($($ty:ty),*) => {
        $(impl QueryValue for $ty {
            fn encode(&self) -> String {
                self.to_string()
            }
        })*
    };
}

impl_query_value_via_display!(u8, u16, u32, u64, i32, i64);

/// Ordered collection of encoded query parameters.
#[derive(Debug, Clone, Default)]
pub(crate) struct QueryPairs {
    pairs: Vec<(&'static str, String)>,
}

impl QueryPairs {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append a parameter.
    pub(crate) fn push(&mut self, key: &'static str, value: impl QueryValue) {
        self.pairs.push((key, value.encode()));
    }

    /// Append a parameter when the value is present; omit it otherwise.
    pub(crate) fn push_opt(&mut self, key: &'static str, value: Option<impl QueryValue>) {
        if let Some(value) = value {
            self.push(key, value);
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub(crate) fn as_slice(&self) -> &[(&'static str, String)] {
        &self.pairs
    }
}

/// Decode a success body through the common response envelope.
///
/// A body that is not valid JSON, does not match the envelope, or carries
/// `data: null` is a schema mismatch: the server claimed success but the
/// payload is unusable.
pub(crate) fn decode_envelope<T: DeserializeOwned>(body: &str) -> Result<T> {
    let envelope: ApiEnvelope<T> = serde_json::from_str(body)
        .map_err(|e| Error::schema_mismatch(format!("failed to decode response: {e}"), body))?;
    envelope
        .data
        .ok_or_else(|| Error::schema_mismatch("response envelope carries no data", body))
}

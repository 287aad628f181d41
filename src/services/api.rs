// SPDX-License-Identifier: MIT

//! OctoFit REST API client for fetching list resources.
//!
//! Handles:
//! - Unauthenticated GETs against `{base_url}{resource}`
//! - Normalizing paginated envelopes (`{results: [...]}`) and bare arrays
//! - Mapping non-2xx statuses and transport faults to `FetchError`
//!
//! One best-effort attempt per call: no retries, no timeout, no caching.

use crate::error::FetchError;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// OctoFit backend API client.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given backend origin.
    ///
    /// The origin is injected here once; it is never read from the
    /// environment at request time.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Fetch one list resource, preserving the backend's record order.
    ///
    /// `resource` is the path including the trailing slash the backend
    /// requires, e.g. `/api/users/`. A response whose shape is neither a
    /// bare array nor a `results` envelope yields an empty list rather
    /// than an error.
    pub async fn fetch_list<T: DeserializeOwned>(
        &self,
        resource: &str,
    ) -> Result<Vec<T>, FetchError> {
        let url = format!("{}{}", self.base_url, resource);
        tracing::debug!(url = %url, "Fetching list resource");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http(status.as_u16()));
        }

        let payload: ListPayload<T> = response
            .json()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(payload.into_records())
    }
}

/// Decoded shape of a list response.
///
/// The backend contract is loose: some endpoints return a DRF-style
/// pagination envelope, others a bare array. The mismatch arm makes the
/// empty-on-unrecognized policy an explicit branch instead of a
/// fallthrough.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListPayload<T> {
    /// Pagination envelope; fields other than `results` are discarded
    Envelope { results: Vec<T> },
    /// Bare array of records
    Array(Vec<T>),
    /// Anything else (object without `results`, scalar, null)
    Other(serde_json::Value),
}

impl<T> ListPayload<T> {
    /// Extract the record sequence, order-preserved.
    pub fn into_records(self) -> Vec<T> {
        match self {
            ListPayload::Envelope { results } => results,
            ListPayload::Array(items) => items,
            ListPayload::Other(value) => {
                tracing::warn!(
                    shape = %shape_name(&value),
                    "Unrecognized list response shape, treating as empty"
                );
                Vec::new()
            }
        }
    }
}

fn shape_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

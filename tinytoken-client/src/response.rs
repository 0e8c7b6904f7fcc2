//! Compression response decoding.

use bytes::Bytes;
use serde::Deserialize;

use crate::{Result, TinyTokenError};

/// JSON body of a successful compression response.
#[derive(Debug, Deserialize)]
pub(crate) struct CompressResponse {
    #[serde(default)]
    compressed_text: Option<String>,
}

impl CompressResponse {
    /// Decode a 2xx body and pull out the compressed text.
    ///
    /// Non-JSON bodies, a missing or null field, a non-string value and the
    /// empty string are all rejected as an invalid response.
    pub(crate) fn extract(body: &Bytes) -> Result<String> {
        let response: CompressResponse = serde_json::from_slice(body).map_err(|e| {
            tracing::debug!(error = %e, "Compression response is not the expected JSON");
            TinyTokenError::InvalidResponse
        })?;

        match response.compressed_text {
            Some(text) if !text.is_empty() => Ok(text),
            _ => Err(TinyTokenError::InvalidResponse),
        }
    }
}

//! Per-call options and the request payload.

use serde::Serialize;

/// Options for a single compression call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompressOptions {
    /// API key for this call. Overrides the client's bound key unless blank.
    pub api_key: Option<String>,
    /// Opaque quality knob, forwarded to the service as-is.
    pub quality: Option<f64>,
}

impl CompressOptions {
    /// Create empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API key for this call.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the quality parameter.
    pub fn quality(mut self, quality: f64) -> Self {
        self.quality = Some(quality);
        self
    }
}

/// JSON body of a compression request.
#[derive(Debug, Serialize)]
pub(crate) struct CompressRequest<'a> {
    pub text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<f64>,
}

impl<'a> CompressRequest<'a> {
    pub(crate) fn new(text: &'a str, options: &CompressOptions) -> Self {
        Self {
            text,
            quality: options.quality,
        }
    }
}

/// Pick the key to send: the per-call key, else the bound key.
///
/// Keys that are blank after trimming count as absent.
pub(crate) fn resolve_api_key<'a>(
    per_call: Option<&'a str>,
    bound: Option<&'a str>,
) -> Option<&'a str> {
    let usable = |key: &'a str| {
        let key = key.trim();
        (!key.is_empty()).then_some(key)
    };

    per_call.and_then(usable).or_else(|| bound.and_then(usable))
}

//! TinyToken client implementation.

use std::sync::Arc;

use async_trait::async_trait;
use http::header::CONTENT_TYPE;
use tracing::{debug, warn};
use url::Url;

use crate::request::{CompressRequest, resolve_api_key};
use crate::response::CompressResponse;
use crate::{CompressOptions, Result, TinyTokenConfig, TinyTokenError};

/// Anything that can compress text.
///
/// Implemented by [`TinyToken`]; depend on this trait to swap in a fake
/// compressor in tests.
#[async_trait]
pub trait TextCompressor: Send + Sync {
    /// Compress `text`, returning the compressed form.
    async fn compress(&self, text: &str, options: CompressOptions) -> Result<String>;
}

/// Client for the TinyToken compression API.
///
/// Each call is one POST with no retries. Cloning is cheap and clones share
/// the underlying connection pool.
#[derive(Clone)]
pub struct TinyToken {
    inner: reqwest::Client,
    config: Arc<TinyTokenConfig>,
    endpoint: Url,
}

impl TinyToken {
    /// Create a client for the production endpoint, optionally binding an API key.
    pub fn new(api_key: Option<&str>) -> Result<Self> {
        Self::with_config(TinyTokenConfig {
            api_key: api_key.map(str::to_string),
            ..Default::default()
        })
    }

    /// Create a client with custom configuration.
    pub fn with_config(config: TinyTokenConfig) -> Result<Self> {
        let endpoint = Url::parse(&config.endpoint)?;

        let inner = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| TinyTokenError::RequestFailed(e.to_string()))?;

        Ok(Self {
            inner,
            config: Arc::new(config),
            endpoint,
        })
    }

    /// Get the client configuration.
    pub fn config(&self) -> &TinyTokenConfig {
        &self.config
    }

    /// Compress `text` with the remote service.
    ///
    /// A non-blank `options.api_key` takes precedence over the key bound at
    /// construction. `options.quality` is sent only when set.
    pub async fn compress(&self, text: &str, options: CompressOptions) -> Result<String> {
        let result = self.execute(text, &options).await;

        match &result {
            Ok(compressed) => debug!(
                input_len = text.len(),
                output_len = compressed.len(),
                "Compression succeeded"
            ),
            Err(e) => warn!(error = %e, status = ?e.status_code(), "Compression failed"),
        }

        result
    }

    async fn execute(&self, text: &str, options: &CompressOptions) -> Result<String> {
        let api_key = resolve_api_key(options.api_key.as_deref(), self.config.api_key.as_deref());

        debug!(
            endpoint = %self.endpoint,
            input_len = text.len(),
            quality = ?options.quality,
            authorized = api_key.is_some(),
            "Sending compression request"
        );

        let mut request = self
            .inner
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .json(&CompressRequest::new(text, options));

        if let Some(key) = api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TinyTokenError::from_status(status));
        }

        let body = response.bytes().await?;
        CompressResponse::extract(&body)
    }
}

#[async_trait]
impl TextCompressor for TinyToken {
    async fn compress(&self, text: &str, options: CompressOptions) -> Result<String> {
        TinyToken::compress(self, text, options).await
    }
}

/// Compress `text` without keeping a client around.
///
/// Builds a default client with no bound key, so only `options.api_key` is
/// ever sent.
pub async fn compress(text: &str, options: CompressOptions) -> Result<String> {
    TinyToken::with_config(TinyTokenConfig::default())?
        .compress(text, options)
        .await
}

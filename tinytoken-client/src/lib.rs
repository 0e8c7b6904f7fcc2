//! # TinyToken Client
//!
//! An async client for the TinyToken text compression API. Text goes up in a
//! single JSON POST and the compressed text comes back; all the compression
//! work happens on the service.
//!
//! ## Features
//!
//! - **One call, one request**: no retries, batching or caching
//! - **Bearer auth**: bind a key to the client or pass one per call
//! - **Typed errors**: every failure is a [`TinyTokenError`] with a stable message
//! - **Timeouts**: 30 seconds by default, configurable
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tinytoken_client::{CompressOptions, TinyToken};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TinyToken::new(Some("tt-your-key"))?;
//!
//!     let compressed = client
//!         .compress("A long prompt that costs too many tokens", CompressOptions::new())
//!         .await?;
//!
//!     println!("{}", compressed);
//!     Ok(())
//! }
//! ```
//!
//! ## Per-call Options
//!
//! ```rust,no_run
//! use tinytoken_client::{compress, CompressOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let options = CompressOptions::new().api_key("tt-your-key").quality(0.5);
//!
//!     match compress("Some text", options).await {
//!         Ok(text) => println!("{}", text),
//!         Err(e) if e.is_retryable() => eprintln!("try again later: {}", e),
//!         Err(e) => eprintln!("{}", e),
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod request;
mod response;

pub use client::{TextCompressor, TinyToken, compress};
pub use config::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT, TinyTokenConfig, TinyTokenConfigBuilder};
pub use error::{Result, TinyTokenError};
pub use request::CompressOptions;

/// Prelude for common imports.
///
/// ```
/// use tinytoken_client::prelude::*;
/// ```
pub mod prelude {
    pub use crate::client::{TextCompressor, TinyToken, compress};
    pub use crate::config::{TinyTokenConfig, TinyTokenConfigBuilder};
    pub use crate::error::{Result, TinyTokenError};
    pub use crate::request::CompressOptions;
}

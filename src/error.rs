//! Error types for template store operations.
//!
//! This module defines:
//! - [`StoreError`], raised while fetching or decoding the template store
//! - [`UnsupportedPlatform`], the value the formatter renders for an unknown
//!   `--platform` (it is printed, never propagated)
//! - [`FaasError`], the crate-level error surfaced by commands
//!
//! # Error Handling Strategy
//!
//! - Every `StoreError` is terminal for the invocation; nothing is retried
//! - Commands wrap store failures in [`FaasError::TemplatesInfo`] so users see
//!   which stage failed
//! - Use `anyhow::Error` (via `FaasError::Other`) for unexpected errors

use thiserror::Error;

/// Failure while fetching or decoding the template store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The request could not be built (bad URL, client setup failure).
    #[error("error while trying to create request to take template info: {}", with_causes(source))]
    RequestConstruction {
        #[source]
        source: reqwest::Error,
    },

    /// Network failure, including the request timing out.
    #[error("error while requesting template list: {}", with_causes(source))]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    /// The store answered with something other than 200 OK.
    #[error("unexpected status code wanted: {wanted} got: {got}")]
    UnexpectedStatus { wanted: u16, got: u16 },

    /// The store answered with no body at all.
    #[error("error empty response body from: {url}")]
    EmptyBody { url: String },

    /// Reading the response body failed part way.
    #[error("error while reading data from templates body: {}", with_causes(source))]
    BodyRead {
        #[source]
        source: reqwest::Error,
    },

    /// The body was not a JSON array of templates.
    #[error("error while unmarshalling into templates struct: {0}")]
    Decode(#[from] serde_json::Error),
}

impl StoreError {
    /// Whether this failure was caused by the request timeout expiring.
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Transport { source } | Self::BodyRead { source } => source.is_timeout(),
            _ => false,
        }
    }
}

/// Render an error followed by every distinct cause in its source chain.
///
/// `reqwest` keeps the interesting part (timed out, connection refused) in
/// its sources, so the top-level message alone cannot tell failures apart.
fn with_causes(err: &(dyn std::error::Error + 'static)) -> String {
    let mut msg = err.to_string();
    let mut source = err.source();

    while let Some(cause) = source {
        let text = cause.to_string();
        if !msg.contains(&text) {
            msg.push_str(": ");
            msg.push_str(&text);
        }
        source = cause.source();
    }

    msg
}

/// A `--platform` value outside the supported set.
///
/// The display text is the exact message printed in place of the table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Currently supported platforms are: armhf, arm64 and x86_64. Unable to find: {platform}")]
pub struct UnsupportedPlatform {
    pub platform: String,
}

/// Core error type for faas-store commands.
#[derive(Debug, Error)]
pub enum FaasError {
    /// Fetching or decoding the template store failed.
    #[error("error while getting templates info: {0}")]
    TemplatesInfo(#[source] StoreError),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for faas-store operations.
pub type Result<T> = std::result::Result<T, FaasError>;

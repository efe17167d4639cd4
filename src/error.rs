//! Error taxonomy and provider failure classification.
//!
//! Every provider-facing operation catches raw transport and provider
//! failures at its boundary and re-raises exactly one [`Error`]; no raw
//! reqwest or provider error ever reaches a caller. The display strings are
//! user-facing and safe to surface verbatim.

use thiserror::Error;

/// Unified error type for the client.
///
/// The variants form a small, user-actionable taxonomy:
/// - [`Error::Config`]: unrecoverable without operator action
/// - [`Error::RateLimit`]: recoverable by waiting
/// - [`Error::Generation`]: the provider completed but produced no usable
///   result; terminal for that request
/// - [`Error::Service`]: catch-all transport/provider failure, recoverable
///   by retrying
#[derive(Debug, Error)]
pub enum Error {
    /// The API credential is missing or rejected by the provider.
    #[error("API key is missing or invalid. Please configure the GEMINI_API_KEY environment variable.")]
    Config,

    /// The provider reported rate limiting or an exhausted quota.
    #[error("Quota exceeded. Please wait a minute and try again.")]
    RateLimit,

    /// The provider answered but returned no usable result.
    #[error("{0}")]
    Generation(String),

    /// Any other transport or provider-side failure.
    ///
    /// The display string stays generic for end users; `detail` carries the
    /// underlying failure for logs.
    #[error("An error occurred while connecting to the AI service. Please try again.")]
    Service {
        /// Serialized form of the underlying failure.
        detail: String,
    },
}

impl Error {
    /// Shorthand for a [`Error::Service`] with the given detail.
    pub(crate) fn service(detail: impl Into<String>) -> Self {
        Error::Service {
            detail: detail.into(),
        }
    }
}

/// Classify a raw provider failure into the caller-facing taxonomy.
///
/// This is purely string/pattern matching over the serialized failure
/// payload, not a structured provider error code, so it is best-effort and
/// may misclassify novel error shapes. Priority order:
///
/// 1. credential markers → [`Error::Config`]
/// 2. rate-limit signals (HTTP 429, `RESOURCE_EXHAUSTED`, the literal token
///    `quota`) → [`Error::RateLimit`]
/// 3. anything else → [`Error::Service`]
pub fn classify_provider_error(status: Option<u16>, payload: &str) -> Error {
    if payload.contains("API_KEY_INVALID") || payload.contains("API key not valid") {
        return Error::Config;
    }

    if status == Some(429)
        || payload.contains("429")
        || payload.contains("RESOURCE_EXHAUSTED")
        || payload.contains("quota")
    {
        return Error::RateLimit;
    }

    tracing::debug!(?status, payload, "unclassified provider failure");
    Error::Service {
        detail: payload.to_string(),
    }
}

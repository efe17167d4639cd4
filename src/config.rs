//! Client configuration.
//!
//! All configuration is supplied explicitly at construction time through
//! [`GeminiClientBuilder`](crate::client::GeminiClientBuilder); there is no
//! ambient lookup once the client exists.

use std::fmt;
use std::time::Duration;

/// Default API root, version path included.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model for chat and one-shot text generation.
pub const DEFAULT_CHAT_MODEL: &str = "gemini-2.5-flash";

/// Default image generation model.
pub const DEFAULT_IMAGE_MODEL: &str = "imagen-4.0-generate-001";

/// Default video generation model.
pub const DEFAULT_VIDEO_MODEL: &str = "veo-2.0-generate-001";

/// Fixed spacing between status polls of a long-running video job.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Default cap on status polls per video job (about ten minutes at the
/// default interval).
pub const DEFAULT_MAX_POLL_ATTEMPTS: u32 = 120;

/// Default per-request timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Resolved configuration held by a [`GeminiClient`](crate::GeminiClient).
#[derive(Clone)]
pub struct GeminiConfig {
    /// Provider credential, sent as the `key` query parameter.
    pub api_key: String,
    /// API root including the version path.
    pub base_url: String,
    /// Model used for chat sessions and one-shot text generation.
    pub chat_model: String,
    /// Model used for image generation.
    pub image_model: String,
    /// Model used for video generation.
    pub video_model: String,
    /// Per-request HTTP timeout.
    pub request_timeout: Duration,
    /// Spacing between video job status polls.
    pub poll_interval: Duration,
    /// Maximum number of status polls before a video job is abandoned.
    pub max_poll_attempts: u32,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            chat_model: DEFAULT_CHAT_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            video_model: DEFAULT_VIDEO_MODEL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
            max_poll_attempts: DEFAULT_MAX_POLL_ATTEMPTS,
        }
    }
}

// Manual Debug: the credential must never land in logs.
impl fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("chat_model", &self.chat_model)
            .field("image_model", &self.image_model)
            .field("video_model", &self.video_model)
            .field("request_timeout", &self.request_timeout)
            .field("poll_interval", &self.poll_interval)
            .field("max_poll_attempts", &self.max_poll_attempts)
            .finish()
    }
}

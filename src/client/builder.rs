//! Builder for [`GeminiClient`].

use std::time::Duration;

use crate::client::core::GeminiClient;
use crate::config::GeminiConfig;
use crate::error::Error;
use crate::Result;

/// Builder for creating clients with custom configuration.
///
/// Keep this surface area small and predictable: one method per knob, with
/// defaults that match the hosted service.
#[derive(Debug, Default)]
pub struct GeminiClientBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    chat_model: Option<String>,
    image_model: Option<String>,
    video_model: Option<String>,
    request_timeout: Option<Duration>,
    poll_interval: Option<Duration>,
    max_poll_attempts: Option<u32>,
}

impl GeminiClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the provider API key. Required; `build` fails without it.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Override the API root URL.
    ///
    /// This is primarily for testing with mock servers; production use keeps
    /// the hosted default.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Model used for chat sessions and one-shot text generation.
    pub fn chat_model(mut self, model: impl Into<String>) -> Self {
        self.chat_model = Some(model.into());
        self
    }

    /// Model used for image generation.
    pub fn image_model(mut self, model: impl Into<String>) -> Self {
        self.image_model = Some(model.into());
        self
    }

    /// Model used for video generation.
    pub fn video_model(mut self, model: impl Into<String>) -> Self {
        self.video_model = Some(model.into());
        self
    }

    /// Per-request HTTP timeout.
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Spacing between video job status polls. The service contract is a
    /// fixed five-second interval; shorter values are mainly for tests.
    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = Some(interval);
        self
    }

    /// Cap on status polls before a video job is abandoned.
    pub fn max_poll_attempts(mut self, attempts: u32) -> Self {
        self.max_poll_attempts = Some(attempts.max(1));
        self
    }

    /// Build the client.
    ///
    /// Fails fast with [`Error::Config`] when the API key is missing or
    /// empty, before any network activity.
    pub fn build(self) -> Result<GeminiClient> {
        let api_key = self.api_key.unwrap_or_default();
        if api_key.trim().is_empty() {
            return Err(Error::Config);
        }

        let mut config = GeminiConfig {
            api_key,
            ..GeminiConfig::default()
        };
        if let Some(url) = self.base_url {
            config.base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(model) = self.chat_model {
            config.chat_model = model;
        }
        if let Some(model) = self.image_model {
            config.image_model = model;
        }
        if let Some(model) = self.video_model {
            config.video_model = model;
        }
        if let Some(timeout) = self.request_timeout {
            config.request_timeout = timeout;
        }
        if let Some(interval) = self.poll_interval {
            config.poll_interval = interval;
        }
        if let Some(attempts) = self.max_poll_attempts {
            config.max_poll_attempts = attempts;
        }

        GeminiClient::from_config(config)
    }
}

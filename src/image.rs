//! Image generation.

use base64::prelude::*;
use serde_json::json;
use std::fmt;

use crate::artifact::MediaArtifact;
use crate::client::GeminiClient;
use crate::error::Error;
use crate::Result;

/// Supported output aspect ratios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AspectRatio {
    /// 1:1
    #[default]
    Square,
    /// 16:9
    Wide,
    /// 3:4
    Portrait,
}

impl AspectRatio {
    /// Wire form expected by the API.
    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Square => "1:1",
            AspectRatio::Wide => "16:9",
            AspectRatio::Portrait => "3:4",
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl GeminiClient {
    /// Generate exactly one JPEG image for the prompt.
    ///
    /// Fails with [`Error::Generation`] when the provider returns zero
    /// images. The result is self-contained binary content; use
    /// [`MediaArtifact::to_data_uri`] for direct display.
    pub async fn generate_image(
        &self,
        prompt: &str,
        aspect_ratio: AspectRatio,
    ) -> Result<MediaArtifact> {
        let body = json!({
            "instances": [{ "prompt": prompt }],
            "parameters": {
                "sampleCount": 1,
                "outputMimeType": "image/jpeg",
                "aspectRatio": aspect_ratio.as_str(),
            },
        });

        let url = self.model_url(&self.config().image_model, "predict");
        let response = self.post_json(&url, &body).await?;

        let encoded = response
            .pointer("/predictions/0/bytesBase64Encoded")
            .and_then(|v| v.as_str())
            .ok_or_else(|| Error::Generation("No image generated".into()))?;

        let bytes = BASE64_STANDARD
            .decode(encoded)
            .map_err(|e| Error::Generation(format!("Image payload was not valid base64: {e}")))?;

        tracing::debug!(bytes = bytes.len(), %aspect_ratio, "image generated");
        Ok(MediaArtifact::new(bytes, "image/jpeg"))
    }
}

//! One-shot text generation.

use serde_json::json;

use crate::client::GeminiClient;
use crate::Result;

/// Returned in place of an empty completion payload.
///
/// Callers must treat this as content, not as an error; the provider
/// answered, it just had nothing to say.
pub const NO_RESPONSE_SENTINEL: &str = "No response generated.";

impl GeminiClient {
    /// Generate text from a single prompt with a system instruction.
    ///
    /// Single request/response, no session state. An empty payload yields
    /// [`NO_RESPONSE_SENTINEL`].
    pub async fn generate_text(&self, prompt: &str, system_instruction: &str) -> Result<String> {
        let body = json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": prompt }],
            }],
            "systemInstruction": { "parts": [{ "text": system_instruction }] },
        });

        let url = self.model_url(&self.config().chat_model, "generateContent");
        let response = self.post_json(&url, &body).await?;

        Ok(crate::client::first_candidate_text(&response)
            .unwrap_or_else(|| NO_RESPONSE_SENTINEL.to_string()))
    }
}

//! Core client: URL assembly, authenticated requests, and the error boundary.
//!
//! Every request goes through [`GeminiClient::post_json`],
//! [`GeminiClient::get_json`] or [`GeminiClient::fetch_bytes`]. These helpers
//! are the single error boundary: raw reqwest failures and non-success
//! provider responses are classified here and nowhere else.

use serde_json::Value;
use url::Url;

use crate::client::builder::GeminiClientBuilder;
use crate::config::GeminiConfig;
use crate::error::{classify_provider_error, Error};
use crate::Result;

/// Client for the Google Generative Language API.
///
/// Explicitly constructed and passed by reference to whatever needs it; the
/// crate keeps no global instance. Cloning is cheap (the underlying HTTP
/// client is reference-counted) and clones share the connection pool.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Start building a client.
    pub fn builder() -> GeminiClientBuilder {
        GeminiClientBuilder::new()
    }

    /// Build a client from the `GEMINI_API_KEY` environment variable,
    /// falling back to `GOOGLE_API_KEY`.
    ///
    /// Fails with [`Error::Config`] when neither is set, before any network
    /// activity.
    pub fn from_env() -> Result<Self> {
        let key = std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("GOOGLE_API_KEY"))
            .unwrap_or_default();
        Self::builder().api_key(key).build()
    }

    pub(crate) fn from_config(config: GeminiConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| Error::service(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// URL for a model verb, e.g. `models/gemini-2.5-flash:generateContent`.
    pub(crate) fn model_url(&self, model: &str, verb: &str) -> String {
        format!("{}/models/{}:{}", self.config.base_url, model, verb)
    }

    /// URL for a long-running operation resource by its provider-assigned
    /// name, e.g. `models/veo-2.0-generate-001/operations/abc123`.
    pub(crate) fn operation_url(&self, name: &str) -> String {
        format!("{}/{}", self.config.base_url, name.trim_start_matches('/'))
    }

    /// Append the credential as the `key` query parameter.
    ///
    /// The API authorizes by query parameter; result URIs returned for
    /// long-running jobs require the same treatment before fetching.
    fn authorized(&self, raw: &str) -> Result<Url> {
        let mut url = Url::parse(raw)
            .map_err(|e| Error::service(format!("invalid request URL {raw}: {e}")))?;
        url.query_pairs_mut().append_pair("key", &self.config.api_key);
        Ok(url)
    }

    /// POST a JSON body and return the parsed JSON response.
    pub(crate) async fn post_json(&self, raw_url: &str, body: &Value) -> Result<Value> {
        tracing::debug!(url = raw_url, "POST");
        let url = self.authorized(raw_url)?;
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| classify_provider_error(None, &e.to_string()))?;
        Self::into_json(response).await
    }

    /// GET and return the parsed JSON response.
    pub(crate) async fn get_json(&self, raw_url: &str) -> Result<Value> {
        tracing::debug!(url = raw_url, "GET");
        let url = self.authorized(raw_url)?;
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| classify_provider_error(None, &e.to_string()))?;
        Self::into_json(response).await
    }

    /// Fetch raw bytes from a provider-issued URI, authenticating with the
    /// credential as a query parameter.
    pub(crate) async fn fetch_bytes(&self, raw_url: &str) -> Result<Vec<u8>> {
        tracing::debug!(url = raw_url, "GET (binary)");
        let url = self.authorized(raw_url)?;
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| classify_provider_error(None, &e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let payload = response.text().await.unwrap_or_default();
            return Err(classify_provider_error(Some(status.as_u16()), &payload));
        }
        let bytes = response
            .bytes()
            .await
            .map_err(|e| classify_provider_error(None, &e.to_string()))?;
        Ok(bytes.to_vec())
    }

    async fn into_json(response: reqwest::Response) -> Result<Value> {
        let status = response.status();
        if !status.is_success() {
            let payload = response.text().await.unwrap_or_default();
            tracing::debug!(status = status.as_u16(), payload, "provider returned failure");
            return Err(classify_provider_error(Some(status.as_u16()), &payload));
        }
        response
            .json::<Value>()
            .await
            .map_err(|e| Error::service(format!("failed to decode provider response: {e}")))
    }
}

/// Extract the first candidate's text from a `generateContent` response.
///
/// Lenient by design: the provider omits `candidates`, `content` or `parts`
/// in several degenerate cases (safety blocks, empty completions).
pub(crate) fn first_candidate_text(body: &Value) -> Option<String> {
    body.pointer("/candidates/0/content/parts/0/text")
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .map(String::from)
}

//! Google Gemini `generateContent` provider.
//!
//! Sends one user turn per call and returns the concatenated text parts of
//! the first candidate.
//!
//! # Authentication
//!
//! Uses the API key from [`RelayConfig`], passed as the `key` query
//! parameter. The key is not checked until the first call.

use async_trait::async_trait;
use serde_json::Value;

use crate::config::RelayConfig;
use crate::llms::base_llm::{LlmError, TextGenerator};

const PROVIDER: &str = "Gemini";

/// Gemini completion client.
///
/// Holds one pooled `reqwest::Client`, so a single instance is shared by all
/// requests.
#[derive(Clone)]
pub struct GeminiCompletion {
    model: String,
    api_key: Option<String>,
    api_base: String,
    client: reqwest::Client,
}

impl GeminiCompletion {
    pub fn new(config: &RelayConfig) -> Self {
        Self {
            model: config.model.clone(),
            api_key: config.api_key.clone(),
            api_base: config.api_base.clone(),
            client: reqwest::Client::new(),
        }
    }

    /// `{api_base}/models/{model}:generateContent`
    pub fn api_endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_base, self.model)
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Request body for a single user prompt.
    pub fn build_request_body(prompt: &str) -> Value {
        serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": prompt }],
            }],
        })
    }

    /// Extract text from a `generateContent` response.
    ///
    /// An `error` object is an error; a response with no candidates or no
    /// text parts yields `Ok(None)`.
    pub fn parse_response(response: &Value) -> Result<Option<String>, LlmError> {
        if let Some(error) = response.get("error") {
            let message = error
                .get("message")
                .and_then(|m| m.as_str())
                .unwrap_or("Unknown Gemini API error")
                .to_string();
            return Err(LlmError::Api {
                provider: PROVIDER,
                message,
            });
        }

        let parts = match response
            .get("candidates")
            .and_then(|c| c.as_array())
            .and_then(|candidates| candidates.first())
            .and_then(|candidate| candidate.get("content"))
            .and_then(|content| content.get("parts"))
            .and_then(|parts| parts.as_array())
        {
            Some(parts) => parts,
            None => return Ok(None),
        };

        let texts: Vec<&str> = parts
            .iter()
            .filter_map(|part| part.get("text").and_then(|t| t.as_str()))
            .collect();

        if texts.is_empty() {
            Ok(None)
        } else {
            Ok(Some(texts.concat()))
        }
    }
}

impl std::fmt::Debug for GeminiCompletion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiCompletion")
            .field("model", &self.model)
            .field("api_base", &self.api_base)
            .field("has_api_key", &self.api_key.is_some())
            .finish()
    }
}

#[async_trait]
impl TextGenerator for GeminiCompletion {
    fn model(&self) -> &str {
        &self.model
    }

    fn provider(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, prompt: &str) -> Result<Option<String>, LlmError> {
        tracing::debug!(model = %self.model, prompt_len = prompt.len(), "Gemini generateContent");

        let api_key = self
            .api_key
            .as_deref()
            .ok_or(LlmError::MissingApiKey { provider: PROVIDER })?;

        let response = self
            .client
            .post(self.api_endpoint())
            .query(&[("key", api_key)])
            .json(&Self::build_request_body(prompt))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(LlmError::Status {
                provider: PROVIDER,
                status: status.as_u16(),
                body: body.chars().take(500).collect(),
            });
        }

        let json: Value = serde_json::from_str(&body)?;

        if let Some(usage) = json.get("usageMetadata") {
            tracing::debug!(usage = %usage, "Gemini usage");
        }

        Self::parse_response(&json)
    }
}

//! HTTP client for the hosted LLM backends.
//!
//! Wraps `reqwest` with provider-specific request construction and response
//! unwrapping. Both backends are asked for a JSON-typed response with a low
//! temperature; the model text is parsed as JSON before being returned, so a
//! non-JSON completion is surfaced as [`LlmError::Json`] here rather than
//! leaking downstream.

use std::time::Duration;

use reqwest::{Client, Url};
use serde_json::{json, Value};

use crate::error::LlmError;
use crate::prompt::SYSTEM_INSTRUCTION;

const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Deterministic-leaning sampling for structured output.
const TEMPERATURE: f64 = 0.2;

/// Which wire protocol the client speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Backend {
    OpenAi,
    Gemini,
}

/// Client for a hosted chat-completion API.
///
/// Use [`LlmClient::openai`] or [`LlmClient::gemini`] for production, or the
/// `*_with_base_url` constructors to point at a mock server in tests.
pub struct LlmClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: Url,
    backend: Backend,
}

impl LlmClient {
    /// Creates a client for the OpenAI chat-completions API.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed.
    pub fn openai(api_key: &str, model: &str, timeout_secs: u64) -> Result<Self, LlmError> {
        Self::openai_with_base_url(api_key, model, timeout_secs, DEFAULT_OPENAI_BASE_URL)
    }

    /// Creates an OpenAI-protocol client with a custom base URL (mock servers,
    /// self-hosted gateways).
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed, or [`LlmError::MalformedResponse`] if `base_url` is not
    /// a valid URL.
    pub fn openai_with_base_url(
        api_key: &str,
        model: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, LlmError> {
        Self::build(api_key, model, timeout_secs, base_url, Backend::OpenAi)
    }

    /// Creates a client for the Gemini `generateContent` API.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed.
    pub fn gemini(api_key: &str, model: &str, timeout_secs: u64) -> Result<Self, LlmError> {
        Self::gemini_with_base_url(api_key, model, timeout_secs, DEFAULT_GEMINI_BASE_URL)
    }

    /// Creates a Gemini-protocol client with a custom base URL.
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed, or [`LlmError::MalformedResponse`] if `base_url` is not
    /// a valid URL.
    pub fn gemini_with_base_url(
        api_key: &str,
        model: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, LlmError> {
        Self::build(api_key, model, timeout_secs, base_url, Backend::Gemini)
    }

    fn build(
        api_key: &str,
        model: &str,
        timeout_secs: u64,
        base_url: &str,
        backend: Backend,
    ) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("medassist/0.1 (symptom-advice)")
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // Url::join appends path segments instead of replacing the last one.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| {
            LlmError::MalformedResponse(format!("invalid base URL '{base_url}': {e}"))
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            model: model.to_owned(),
            base_url,
            backend,
        })
    }

    /// Sends the prompt and returns the model's output parsed as JSON.
    ///
    /// # Errors
    ///
    /// - [`LlmError::Http`] on network failure.
    /// - [`LlmError::Api`] on a non-2xx HTTP status, carrying the body text.
    /// - [`LlmError::MalformedResponse`] if the envelope lacks the model text.
    /// - [`LlmError::Json`] if the envelope or the model text is not valid JSON.
    pub async fn complete_advice(&self, prompt: &str) -> Result<Value, LlmError> {
        tracing::debug!(backend = ?self.backend, model = %self.model, "requesting advice completion");
        let envelope = match self.backend {
            Backend::OpenAi => self.request_openai(prompt).await?,
            Backend::Gemini => self.request_gemini(prompt).await?,
        };

        let text = self.extract_model_text(&envelope)?;
        serde_json::from_str(text).map_err(|e| LlmError::Json {
            context: "model output".to_string(),
            source: e,
        })
    }

    async fn request_openai(&self, prompt: &str) -> Result<Value, LlmError> {
        let url = self.join_url("chat/completions")?;
        let body = json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": SYSTEM_INSTRUCTION },
                { "role": "user", "content": prompt },
            ],
            "temperature": TEMPERATURE,
            "response_format": { "type": "json_object" },
        });

        let response = self
            .client
            .post(url.clone())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        Self::read_json(response, &url).await
    }

    async fn request_gemini(&self, prompt: &str) -> Result<Value, LlmError> {
        let mut url = self.join_url(&format!("models/{}:generateContent", self.model))?;
        url.query_pairs_mut().append_pair("key", &self.api_key);
        let body = json!({
            "contents": [
                { "parts": [ { "text": prompt } ] },
            ],
            "generationConfig": {
                "temperature": TEMPERATURE,
                "responseMimeType": "application/json",
            },
        });

        let response = self.client.post(url.clone()).json(&body).send().await?;

        Self::read_json(response, &url).await
    }

    /// Asserts a 2xx status and parses the response body as JSON. Non-2xx
    /// responses keep their body text for the error message.
    async fn read_json(response: reqwest::Response, url: &Url) -> Result<Value, LlmError> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(LlmError::Api {
                status: status.as_u16(),
                body,
            });
        }
        serde_json::from_str(&body).map_err(|e| LlmError::Json {
            context: url.to_string(),
            source: e,
        })
    }

    /// Pulls the model's text out of the provider-specific envelope.
    fn extract_model_text<'a>(&self, envelope: &'a Value) -> Result<&'a str, LlmError> {
        let (pointer, description) = match self.backend {
            Backend::OpenAi => ("/choices/0/message/content", "choices[0].message.content"),
            Backend::Gemini => (
                "/candidates/0/content/parts/0/text",
                "candidates[0].content.parts[0].text",
            ),
        };
        envelope
            .pointer(pointer)
            .and_then(Value::as_str)
            .ok_or_else(|| LlmError::MalformedResponse(format!("missing {description}")))
    }

    fn join_url(&self, path: &str) -> Result<Url, LlmError> {
        self.base_url
            .join(path)
            .map_err(|e| LlmError::MalformedResponse(format!("invalid request path '{path}': {e}")))
    }
}

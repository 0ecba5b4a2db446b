//! HTTP client for the Google Gemini `generateContent` REST endpoint.
//!
//! The generators only ever ask for JSON output (`responseMimeType:
//! application/json`), so the single operation here returns a parsed
//! `serde_json::Value`. Callers own the degradation policy — every
//! generator falls back to deterministic templates on any error from this
//! client, so nothing in this module is allowed to panic or retry.

use std::time::Duration;

use reqwest::{Client, Url};
use serde_json::json;

use crate::error::ContentError;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Client for the Gemini REST API.
///
/// Use [`GeminiClient::new`] for production or
/// [`GeminiClient::with_base_url`] to point at a mock server in tests.
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: Url,
    model: String,
}

impl GeminiClient {
    /// Creates a new client pointed at the production Gemini API.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, model: &str, timeout_secs: u64) -> Result<Self, ContentError> {
        Self::with_base_url(api_key, model, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ContentError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn with_base_url(
        api_key: &str,
        model: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, ContentError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("hellocomp/0.1 (content-toolkit)")
            .build()?;

        let base_url =
            Url::parse(base_url).map_err(|e| ContentError::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
            model: model.to_owned(),
        })
    }

    /// Requests a JSON-mode completion and returns the parsed candidate
    /// payload.
    ///
    /// # Errors
    ///
    /// - [`ContentError::UnexpectedStatus`] — any non-2xx response.
    /// - [`ContentError::Http`] — network or TLS failure.
    /// - [`ContentError::EmptyResponse`] — no candidate text in the body.
    /// - [`ContentError::Deserialize`] — body or candidate text is not
    ///   valid JSON.
    pub async fn generate_json(
        &self,
        system_instruction: &str,
        user_prompt: &str,
    ) -> Result<serde_json::Value, ContentError> {
        let url = self.build_url();

        let request_body = json!({
            "system_instruction": { "parts": [{ "text": system_instruction }] },
            "contents": [{ "parts": [{ "text": user_prompt }] }],
            "generationConfig": {
                "temperature": 0.8,
                "maxOutputTokens": 1024,
                "responseMimeType": "application/json",
            },
        });

        let response = self.client.post(url).json(&request_body).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ContentError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let envelope: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| ContentError::Deserialize {
                context: "generateContent envelope".to_string(),
                source: e,
            })?;

        let text = Self::candidate_text(&envelope).ok_or(ContentError::EmptyResponse)?;
        serde_json::from_str(&text).map_err(|e| ContentError::Deserialize {
            context: "generateContent candidate payload".to_string(),
            source: e,
        })
    }

    /// Builds `{base}/v1beta/models/{model}:generateContent?key={key}`.
    fn build_url(&self) -> Url {
        let mut url = self.base_url.clone();
        url.set_path(&format!("v1beta/models/{}:generateContent", self.model));
        url.query_pairs_mut().append_pair("key", &self.api_key);
        url
    }

    /// Concatenates the text parts of the first candidate, if any.
    fn candidate_text(envelope: &serde_json::Value) -> Option<String> {
        let parts = envelope
            .get("candidates")?
            .get(0)?
            .get("content")?
            .get("parts")?
            .as_array()?;
        let text: String = parts
            .iter()
            .filter_map(|p| p.get("text").and_then(serde_json::Value::as_str))
            .collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};

use crate::client::provider_error::ProviderError;

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: String,
}

/// Client for the generative-text provider. Sends a prompt and returns the
/// first candidate's raw text. No retries and no timeout override, the call
/// blocks for as long as the provider takes.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    domain: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(domain: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            api_key: api_key.into(),
        }
    }

    pub async fn generate_text(
        &self,
        client: &Client,
        prompt: &str,
    ) -> Result<String, ProviderError> {
        let url = format!(
            "{}/v1beta/models/gemini-2.0-flash:generateContent",
            self.domain
        );

        info!("GeminiClient sending request to: {}", url);
        let response = client
            .post(&url)
            .header("content-type", "application/json")
            .header("x-goog-api-key", &self.api_key)
            .json(&json!({ "contents": [{ "parts": [{ "text": prompt }] }] }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or("No body".into());
            error!("GeminiClient request failed: {} - {}", status, body);
            return Err(ProviderError::Api(status, body));
        }

        let envelope = response.json::<GenerateContentResponse>().await?;
        envelope
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or(ProviderError::EmptyResponse)
    }
}

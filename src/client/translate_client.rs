use reqwest::Client;
use serde::Deserialize;
use tracing::{error, info};

use crate::client::provider_error::ProviderError;

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    #[serde(rename = "responseData")]
    response_data: TranslateResponseData,
}

#[derive(Debug, Deserialize)]
struct TranslateResponseData {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

/// Client for the MyMemory-style translation provider. A single GET with
/// `q` and `langpair` query parameters, errors propagate to the caller.
#[derive(Debug, Clone)]
pub struct TranslateClient {
    domain: String,
}

impl TranslateClient {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
        }
    }

    pub async fn translate(
        &self,
        client: &Client,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, ProviderError> {
        let url = format!("{}/get", self.domain);
        let langpair = format!("{}|{}", source_lang, target_lang);

        info!("TranslateClient sending request to: {}", url);
        let response = client
            .get(&url)
            .query(&[("q", text), ("langpair", &langpair)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or("No body".into());
            error!("TranslateClient request failed: {} - {}", status, body);
            return Err(ProviderError::Api(status, body));
        }

        let envelope = response.json::<TranslateResponse>().await?;
        Ok(envelope.response_data.translated_text)
    }
}

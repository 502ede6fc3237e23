use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Api error: {0} - {1}")]
    Api(StatusCode, String),

    #[error("Provider returned no content")]
    EmptyResponse,

    #[error("Failed to parse provider payload: {0}")]
    Parse(#[from] serde_json::Error),
}

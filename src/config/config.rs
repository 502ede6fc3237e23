use config::{Config, ConfigError, Environment};
use once_cell::sync::Lazy;
use serde::Deserialize;

pub static CONFIG: Lazy<AppConfig> =
    Lazy::new(|| AppConfig::load().unwrap_or_else(|e| panic!("Failed to load configuration: {e}")));

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub server: ServerConfig,
    pub gemini: GeminiConfig,
    pub translate: TranslateConfig,
}

#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct GeminiConfig {
    pub domain: String,
    pub api_key: String,
}

#[derive(Debug, Deserialize)]
pub struct TranslateConfig {
    pub domain: String,
}

impl AppConfig {
    /// Reads `LINGUA__*` environment variables, nested fields separated
    /// by `__` (e.g. `LINGUA__SERVER__PORT`).
    fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(
                Environment::with_prefix("LINGUA")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }
}

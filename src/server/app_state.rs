use std::sync::Arc;

use reqwest::Client;
use sqlx::{Pool, Postgres};

use crate::{
    client::{gemini_client::GeminiClient, translate_client::TranslateClient},
    config::config::CONFIG,
    server::error::ServerError,
    session::store::SessionStore,
};

pub struct AppState {
    pool: Pool<Postgres>,
    client: Client,
    gemini: GeminiClient,
    translator: TranslateClient,
    sessions: SessionStore,
}

impl AppState {
    pub async fn from_connection_string(connection_string: &str) -> Result<Arc<Self>, ServerError> {
        let pool = Pool::<Postgres>::connect(connection_string).await?;
        sqlx::migrate!("./migrations").run(&pool).await?;

        let client = Client::new();
        let gemini = GeminiClient::new(&CONFIG.gemini.domain, &CONFIG.gemini.api_key);
        let translator = TranslateClient::new(&CONFIG.translate.domain);
        let sessions = SessionStore::new();

        let state = Arc::new(Self {
            pool,
            client,
            gemini,
            translator,
            sessions,
        });

        Ok(state)
    }

    pub fn get_pool(&self) -> &Pool<Postgres> {
        &self.pool
    }

    pub fn get_client(&self) -> &Client {
        &self.client
    }

    pub fn get_gemini(&self) -> &GeminiClient {
        &self.gemini
    }

    pub fn get_translator(&self) -> &TranslateClient {
        &self.translator
    }

    pub fn get_sessions(&self) -> &SessionStore {
        &self.sessions
    }
}

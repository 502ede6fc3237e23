use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Audit row written for every executed translation.
#[derive(Debug, Serialize, Clone, sqlx::FromRow)]
pub struct Translation {
    pub id: Uuid,
    pub user_id: Uuid,
    pub source_lang: String,
    pub target_lang: String,
    pub input_text: String,
    pub translated_text: String,
}

#[derive(Debug, Deserialize)]
pub struct TranslateRequest {
    pub source_lang: String,
    pub target_lang: String,
    pub input_text: String,
}

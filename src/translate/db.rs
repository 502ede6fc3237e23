use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{server::error::ServerError, translate::models::Translation};

pub async fn insert_translation(
    pool: &Pool<Postgres>,
    user_id: &Uuid,
    source_lang: &str,
    target_lang: &str,
    input_text: &str,
    translated_text: &str,
) -> Result<(), ServerError> {
    let result = sqlx::query(
        r#"
        INSERT INTO "translation"
            (id, user_id, source_lang, target_lang, input_text, translated_text)
        VALUES ($1, $2, $3, $4, $5, $6)
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(source_lang)
    .bind(target_lang)
    .bind(input_text)
    .bind(translated_text)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(ServerError::Internal("Failed to log translation".into()));
    }

    Ok(())
}

pub async fn list_translations_for_user(
    pool: &Pool<Postgres>,
    user_id: &Uuid,
) -> Result<Vec<Translation>, sqlx::Error> {
    sqlx::query_as::<_, Translation>(
        r#"
        SELECT id, user_id, source_lang, target_lang, input_text, translated_text
        FROM "translation"
        WHERE user_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

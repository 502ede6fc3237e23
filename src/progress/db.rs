use sqlx::{Pool, Postgres};
use tracing::warn;
use uuid::Uuid;

use crate::{progress::models::ProgressView, server::error::ServerError};

pub async fn list_progress_for_user(
    pool: &Pool<Postgres>,
    user_id: &Uuid,
) -> Result<Vec<ProgressView>, sqlx::Error> {
    sqlx::query_as::<_, ProgressView>(
        r#"
        SELECT up.id, l.language, l.title AS lesson_title, up.completed, up.quiz_score
        FROM "user_progress" up
        JOIN "lesson" l ON up.lesson_id = l.id
        WHERE up.user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

pub async fn get_progress_owner(
    pool: &Pool<Postgres>,
    progress_id: &Uuid,
) -> Result<Option<Uuid>, sqlx::Error> {
    sqlx::query_scalar::<_, Uuid>(r#"SELECT user_id FROM "user_progress" WHERE id = $1"#)
        .bind(progress_id)
        .fetch_optional(pool)
        .await
}

pub async fn delete_progress(
    pool: &Pool<Postgres>,
    progress_id: &Uuid,
) -> Result<(), ServerError> {
    let result = sqlx::query(r#"DELETE FROM "user_progress" WHERE id = $1"#)
        .bind(progress_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        warn!("Query failed, no progress record with id: {}", progress_id);
        return Err(ServerError::NotFound(
            "Progress record does not exist".into(),
        ));
    }

    Ok(())
}

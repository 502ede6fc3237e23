use sqlx::{Pool, Postgres};

use crate::lesson::models::Lesson;

pub async fn list_lessons_by_language(
    pool: &Pool<Postgres>,
    language: &str,
) -> Result<Vec<Lesson>, sqlx::Error> {
    sqlx::query_as::<_, Lesson>(
        r#"
        SELECT id, language, title, content, audio_link
        FROM "lesson"
        WHERE language = $1
        "#,
    )
    .bind(language)
    .fetch_all(pool)
    .await
}

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{quiz::models::Question, server::error::ServerError};

/// Looks up the anchor lesson for a language's quizzes, creating it on first
/// use. Lookup and insert are individually committed; a crash in between
/// leaves an orphan lesson, which is acceptable.
pub async fn get_or_create_quiz_lesson(
    pool: &Pool<Postgres>,
    language: &str,
) -> Result<Uuid, ServerError> {
    let title = format!("{} Quiz", language);

    let existing = sqlx::query_scalar::<_, Uuid>(
        r#"
        SELECT id FROM "lesson"
        WHERE language = $1 AND title = $2
        "#,
    )
    .bind(language)
    .bind(&title)
    .fetch_optional(pool)
    .await?;

    if let Some(id) = existing {
        return Ok(id);
    }

    let id = sqlx::query_scalar::<_, Uuid>(
        r#"
        INSERT INTO "lesson" (id, language, title, content, audio_link)
        VALUES ($1, $2, $3, $4, '')
        RETURNING id
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(language)
    .bind(&title)
    .bind(format!("Quiz for {} learners", language))
    .fetch_one(pool)
    .await?;

    Ok(id)
}

pub async fn insert_progress(
    pool: &Pool<Postgres>,
    user_id: &Uuid,
    lesson_id: &Uuid,
    quiz_score: f64,
) -> Result<(), ServerError> {
    let result = sqlx::query(
        r#"
        INSERT INTO "user_progress" (id, user_id, lesson_id, completed, quiz_score)
        VALUES ($1, $2, $3, TRUE, $4)
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(lesson_id)
    .bind(quiz_score)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(ServerError::Internal(
            "Failed to persist quiz progress".into(),
        ));
    }

    Ok(())
}

/// Audit copy of a generated question set. Options are stored as opaque
/// serialized text, not normalized.
pub async fn store_generated_questions(
    pool: &Pool<Postgres>,
    mother_language: &str,
    learning_language: &str,
    questions: &[Question],
) -> Result<(), ServerError> {
    for question in questions {
        let options = serde_json::to_string(&question.options)?;

        sqlx::query(
            r#"
            INSERT INTO "quiz_question"
                (id, mother_language, learning_language, question_text, options, correct_answer)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(mother_language)
        .bind(learning_language)
        .bind(&question.question)
        .bind(&options)
        .bind(&question.correct_answer)
        .execute(pool)
        .await?;
    }

    Ok(())
}

use sqlx::{Pool, Postgres};
use tracing::error;
use uuid::Uuid;

use crate::{
    auth::models::{User, UserCredentials},
    server::error::ServerError,
};

pub async fn username_taken(pool: &Pool<Postgres>, username: &str) -> Result<bool, sqlx::Error> {
    let existing =
        sqlx::query_scalar::<_, Uuid>(r#"SELECT id FROM "app_user" WHERE username = $1"#)
            .bind(username)
            .fetch_optional(pool)
            .await?;

    Ok(existing.is_some())
}

pub async fn create_user(
    pool: &Pool<Postgres>,
    username: &str,
    email: &str,
    password_hash: &str,
) -> Result<Uuid, ServerError> {
    let id = Uuid::new_v4();

    let result = sqlx::query(
        r#"
        INSERT INTO "app_user" (id, username, email, password_hash)
        VALUES ($1, $2, $3, $4)
        "#,
    )
    .bind(id)
    .bind(username)
    .bind(email)
    .bind(password_hash)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        error!("Failed to create user: {}", username);
        return Err(ServerError::Internal("Failed to create user".into()));
    }

    Ok(id)
}

pub async fn get_credentials_by_username(
    pool: &Pool<Postgres>,
    username: &str,
) -> Result<Option<UserCredentials>, sqlx::Error> {
    sqlx::query_as::<_, UserCredentials>(
        r#"
        SELECT id, password_hash
        FROM "app_user"
        WHERE username = $1
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await
}

pub async fn get_user_by_id(
    pool: &Pool<Postgres>,
    user_id: &Uuid,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, email, created_at
        FROM "app_user"
        WHERE id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

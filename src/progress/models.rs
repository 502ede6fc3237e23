use serde::Serialize;
use uuid::Uuid;

/// A progress row joined with its lesson for display.
#[derive(Debug, Serialize, Clone, sqlx::FromRow)]
pub struct ProgressView {
    pub id: Uuid,
    pub language: String,
    pub lesson_title: String,
    pub completed: bool,
    pub quiz_score: f64,
}

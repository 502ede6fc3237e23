use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, sqlx::FromRow)]
pub struct Lesson {
    pub id: Uuid,
    pub language: String,
    pub title: String,
    pub content: String,
    pub audio_link: String,
}

#[derive(Debug, Deserialize)]
pub struct GenerateLessonRequest {
    pub language: String,
    #[serde(default = "default_lesson_number")]
    pub lesson_number: u32,
}

fn default_lesson_number() -> u32 {
    1
}

/// Shape the provider is prompted to return for a generated lesson.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LessonContent {
    pub native_sentence: String,
    pub learning_sentence: String,
    pub native_vocabulary: Vec<String>,
    pub learning_vocabulary: Vec<String>,
}

use std::sync::Arc;

use axum::{
    Extension, Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;
use tracing::warn;

use crate::{
    auth::models::CurrentUser,
    client::provider_error::ProviderError,
    lesson::{
        db,
        fallback::fallback_lesson_content,
        models::{GenerateLessonRequest, LessonContent},
    },
    quiz::generator::strip_code_fences,
    server::{app_state::AppState, error::ServerError},
};

pub fn lesson_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/{language}", get(list_lessons))
        .route("/generate", post(generate_lesson_content))
        .with_state(state)
}

async fn list_lessons(
    State(state): State<Arc<AppState>>,
    Extension(_user): Extension<CurrentUser>,
    Path(language): Path<String>,
) -> Result<impl IntoResponse, ServerError> {
    let lessons = db::list_lessons_by_language(state.get_pool(), &language).await?;
    Ok((StatusCode::OK, Json(lessons)))
}

fn build_prompt(language: &str, lesson_number: u32) -> String {
    format!(
        r#"Create a language learning lesson for someone learning {language}.
The user is a beginner and this is lesson {lesson_number}.

Provide a JSON response with this exact structure:
{{
    "native_sentence": "A useful, practical sentence in English for beginners",
    "learning_sentence": "The translation of the native sentence in {language}",
    "native_vocabulary": ["list", "of", "5", "key", "words"],
    "learning_vocabulary": ["translated", "words", "in", "target", "language"]
}}

Make the sentence practical for daily conversation. Include 5 key vocabulary words from the sentence.
Return ONLY the JSON, no other text."#
    )
}

/// AI-or-fallback lesson generation. A non-success provider status yields an
/// error payload, while transport and parse failures yield the static
/// fallback lesson; the asymmetry is inherited behavior and kept on purpose.
async fn generate_lesson_content(
    State(state): State<Arc<AppState>>,
    Extension(_user): Extension<CurrentUser>,
    Json(request): Json<GenerateLessonRequest>,
) -> Result<impl IntoResponse, ServerError> {
    let prompt = build_prompt(&request.language, request.lesson_number);

    let content = match state
        .get_gemini()
        .generate_text(state.get_client(), &prompt)
        .await
    {
        Ok(text) => match serde_json::from_str::<LessonContent>(&strip_code_fences(&text)) {
            Ok(content) => content,
            Err(e) => {
                warn!("Failed to parse generated lesson, using fallback: {}", e);
                fallback_lesson_content(&request.language)
            }
        },
        Err(ProviderError::Api(status, body)) => {
            warn!("Lesson generation rejected upstream: {} - {}", status, body);
            return Ok(Json(json!({
                "success": false,
                "error": "Failed to generate content",
            })));
        }
        Err(e) => {
            warn!("Lesson generation failed, using fallback: {}", e);
            fallback_lesson_content(&request.language)
        }
    };

    Ok(Json(json!({ "success": true, "content": content })))
}

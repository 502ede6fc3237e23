use std::sync::Arc;

use axum::{
    Extension, Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;
use tracing::{info, warn};

use crate::{
    auth::models::CurrentUser,
    quiz::{
        db, generator,
        models::{QuestionView, StartQuizRequest, SubmitAnswerRequest},
        session::QuizRun,
    },
    server::{app_state::AppState, error::ServerError},
};

static QUIZ_LANGUAGES: [&str; 8] = [
    "Tamil", "English", "Telugu", "French", "German", "Spanish", "Hindi", "Mandarin",
];

const QUESTION_COUNT: usize = 10;

pub fn quiz_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/setup", get(quiz_setup))
        .route("/start", post(start_quiz))
        .route("/question", get(take_quiz))
        .route("/answer", post(submit_answer))
        .route("/result", get(quiz_result))
        .with_state(state)
}

async fn quiz_setup() -> impl IntoResponse {
    Json(json!({ "languages": QUIZ_LANGUAGES }))
}

async fn start_quiz(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Json(request): Json<StartQuizRequest>,
) -> Result<impl IntoResponse, ServerError> {
    let questions = generator::generate(
        state.get_client(),
        state.get_gemini(),
        &request.mother_language,
        &request.learning_language,
        QUESTION_COUNT,
    )
    .await;

    if questions.is_empty() {
        return Err(ServerError::Validation(
            "Failed to generate quiz questions. Please try again.".into(),
        ));
    }

    // Audit copy only, the quiz runs entirely off session state.
    if let Err(e) = db::store_generated_questions(
        state.get_pool(),
        &request.mother_language,
        &request.learning_language,
        &questions,
    )
    .await
    {
        warn!("Failed to store generated questions: {}", e);
    }

    let total = questions.len();
    let run = QuizRun::new(&request.mother_language, &request.learning_language, questions);

    if !state.get_sessions().put_quiz(&user.token, run) {
        return Err(ServerError::Internal("Session no longer exists".into()));
    }

    info!(
        "User {} started a {} -> {} quiz with {} questions",
        user.user_id, request.mother_language, request.learning_language, total
    );

    Ok((StatusCode::CREATED, Json(json!({ "total_questions": total }))))
}

async fn take_quiz(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
) -> Result<impl IntoResponse, ServerError> {
    let Some(run) = state.get_sessions().quiz(&user.token) else {
        return Err(ServerError::NotFound("No active quiz".into()));
    };

    if run.is_complete() {
        return Ok(Json(json!({ "completed": true })).into_response());
    }

    let Some(question) = run.current_question() else {
        return Err(ServerError::Internal("Quiz state out of bounds".into()));
    };

    let view = QuestionView {
        question_number: run.current_index + 1,
        total_questions: run.total_questions(),
        question: question.question.clone(),
        options: question.options.clone(),
        mother_language: run.mother_language.clone(),
        learning_language: run.learning_language.clone(),
    };

    Ok(Json(json!({ "completed": false, "question": view })).into_response())
}

async fn submit_answer(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
    Json(request): Json<SubmitAnswerRequest>,
) -> Result<impl IntoResponse, ServerError> {
    // Submissions past the last question fall through as no-ops inside the
    // state machine.
    let result = state
        .get_sessions()
        .with_quiz_mut(&user.token, |run| run.submit_answer(&request.answer));

    match result {
        Some(_) => Ok(StatusCode::OK),
        None => Err(ServerError::NotFound("No active quiz".into())),
    }
}

async fn quiz_result(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<CurrentUser>,
) -> Result<impl IntoResponse, ServerError> {
    // Taking the run out clears the transient state unconditionally; the
    // persistence below may still fail afterwards since the two writes are
    // not transactional.
    let Some(run) = state.get_sessions().clear_quiz(&user.token) else {
        return Err(ServerError::NotFound("No active quiz".into()));
    };

    let total_questions = run.total_questions();
    let percentage = run.percentage();

    if total_questions > 0 {
        let lesson_id =
            db::get_or_create_quiz_lesson(state.get_pool(), &run.learning_language).await?;
        db::insert_progress(state.get_pool(), &user.user_id, &lesson_id, percentage).await?;
    }

    Ok(Json(json!({
        "score": run.score,
        "total_questions": total_questions,
        "percentage": percentage,
        "user_answers": run.answers,
        "mother_language": run.mother_language,
        "learning_language": run.learning_language,
    })))
}

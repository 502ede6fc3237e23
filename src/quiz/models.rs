use serde::{Deserialize, Serialize};

/// A generated multiple-choice question. The provider is asked for exactly
/// four options with the correct answer among them, but nothing enforces
/// that shape, malformed provider output flows through as-is.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Question {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

#[derive(Debug, Deserialize)]
pub struct StartQuizRequest {
    pub mother_language: String,
    pub learning_language: String,
}

#[derive(Debug, Deserialize)]
pub struct SubmitAnswerRequest {
    pub answer: String,
}

/// What the client gets to see while a quiz is running. Deliberately
/// excludes `correct_answer`.
#[derive(Debug, Serialize)]
pub struct QuestionView {
    pub question_number: usize,
    pub total_questions: usize,
    pub question: String,
    pub options: Vec<String>,
    pub mother_language: String,
    pub learning_language: String,
}

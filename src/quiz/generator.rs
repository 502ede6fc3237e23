use reqwest::Client;
use tracing::warn;

use crate::{
    client::gemini_client::GeminiClient,
    quiz::{fallback::fallback_questions, models::Question},
};

fn build_prompt(mother_language: &str, learning_language: &str, count: usize) -> String {
    format!(
        r#"Create {count} basic language learning quiz questions for someone learning {learning_language} with {mother_language} as their native language.

Requirements:
- Questions should be in {mother_language}
- Multiple choice options should be in {learning_language}
- Questions should cover basic vocabulary, common phrases, and simple grammar
- Make questions appropriate for beginners
- Provide exactly 4 options for each question
- Format your response as a JSON array where each object has:
  - "question": the question in {mother_language}
  - "options": array of 4 options in {learning_language}
  - "correct_answer": the correct option in {learning_language}

Example for mother_language=English, learning_language=Spanish:
{{
  "question": "How do you say 'Hello' in Spanish?",
  "options": ["Hola", "Adiós", "Gracias", "Por favor"],
  "correct_answer": "Hola"
}}

Return ONLY the JSON array, no other text."#
    )
}

/// Providers tend to wrap JSON payloads in markdown code fences even when
/// told not to.
pub fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}

pub fn parse_questions(text: &str) -> Result<Vec<Question>, serde_json::Error> {
    serde_json::from_str(&strip_code_fences(text))
}

/// Builds an ordered question set for a language pair. The provider path is
/// tried first; on any failure (transport, non-2xx status, missing content,
/// unparseable JSON) the static fallback table answers instead. Never fails,
/// but the result may be empty - callers must treat an empty list as a
/// failed quiz initiation.
pub async fn generate(
    client: &Client,
    gemini: &GeminiClient,
    mother_language: &str,
    learning_language: &str,
    count: usize,
) -> Vec<Question> {
    let prompt = build_prompt(mother_language, learning_language, count);

    match gemini.generate_text(client, &prompt).await {
        Ok(text) => match parse_questions(&text) {
            Ok(questions) => questions,
            Err(e) => {
                warn!("Failed to parse generated questions, using fallback: {}", e);
                fallback_questions(mother_language, learning_language, count)
            }
        },
        Err(e) => {
            warn!("Question generation failed, using fallback: {}", e);
            fallback_questions(mother_language, learning_language, count)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_plain_json_array() {
        let text = r#"[{"question": "q", "options": ["a", "b", "c", "d"], "correct_answer": "a"}]"#;
        let questions = parse_questions(text).unwrap();

        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].correct_answer, "a");
        assert_eq!(questions[0].options.len(), 4);
    }

    #[test]
    fn strips_markdown_code_fences_before_parsing() {
        let text = "```json\n[{\"question\": \"q\", \"options\": [\"a\"], \"correct_answer\": \"a\"}]\n```";
        let questions = parse_questions(text).unwrap();

        assert_eq!(questions.len(), 1);
    }

    #[test]
    fn malformed_payload_is_a_parse_error() {
        assert!(parse_questions("not json at all").is_err());
        assert!(parse_questions("{\"question\": \"not an array\"}").is_err());
    }

    #[test]
    fn prompt_embeds_languages_and_count() {
        let prompt = build_prompt("English", "Spanish", 10);

        assert!(prompt.contains("Create 10 basic language learning quiz questions"));
        assert!(prompt.contains("learning Spanish"));
        assert!(prompt.contains("English as their native language"));
    }
}

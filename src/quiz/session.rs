use serde::{Deserialize, Serialize};

use crate::quiz::models::Question;

/// One entry in the per-run answer log.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AnswerRecord {
    pub question: String,
    pub user_answer: String,
    pub correct_answer: String,
    pub is_correct: bool,
}

/// Transient state of one quiz attempt. Lives only in the session store,
/// never in the database; it is created on start, mutated once per submitted
/// answer and cleared exactly once when the result is computed.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct QuizRun {
    pub mother_language: String,
    pub learning_language: String,
    pub questions: Vec<Question>,
    pub current_index: usize,
    pub score: u32,
    pub answers: Vec<AnswerRecord>,
}

impl QuizRun {
    pub fn new(
        mother_language: impl Into<String>,
        learning_language: impl Into<String>,
        questions: Vec<Question>,
    ) -> Self {
        Self {
            mother_language: mother_language.into(),
            learning_language: learning_language.into(),
            questions,
            current_index: 0,
            score: 0,
            answers: Vec::new(),
        }
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    pub fn is_complete(&self) -> bool {
        self.current_index >= self.questions.len()
    }

    /// Scores the submitted answer against the current question by literal
    /// string equality and advances the index by one. Submissions past the
    /// last question are silently ignored.
    pub fn submit_answer(&mut self, answer: &str) {
        let Some(question) = self.questions.get(self.current_index) else {
            return;
        };

        let is_correct = answer == question.correct_answer;
        if is_correct {
            self.score += 1;
        }

        self.answers.push(AnswerRecord {
            question: question.question.clone(),
            user_answer: answer.to_string(),
            correct_answer: question.correct_answer.clone(),
            is_correct,
        });

        self.current_index += 1;
    }

    pub fn percentage(&self) -> f64 {
        if self.questions.is_empty() {
            return 0.0;
        }

        self.score as f64 / self.questions.len() as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(text: &str, correct: &str) -> Question {
        Question {
            question: text.to_string(),
            options: vec![
                correct.to_string(),
                "wrong a".to_string(),
                "wrong b".to_string(),
                "wrong c".to_string(),
            ],
            correct_answer: correct.to_string(),
        }
    }

    fn two_question_run() -> QuizRun {
        QuizRun::new(
            "English",
            "Spanish",
            vec![question("q1", "Hola"), question("q2", "Gracias")],
        )
    }

    #[test]
    fn score_matches_correct_answer_log_entries() {
        let mut run = two_question_run();
        run.submit_answer("Hola");
        run.submit_answer("Adiós");

        assert_eq!(run.score, 1);
        let correct_entries = run.answers.iter().filter(|a| a.is_correct).count();
        assert_eq!(run.score as usize, correct_entries);
        assert!(run.score as usize <= run.answers.len());
    }

    #[test]
    fn index_advances_once_per_submission() {
        let mut run = two_question_run();
        assert_eq!(run.current_index, 0);

        run.submit_answer("whatever");
        assert_eq!(run.current_index, 1);

        run.submit_answer("whatever");
        assert_eq!(run.current_index, 2);
        assert!(run.is_complete());
    }

    #[test]
    fn submission_past_the_end_is_a_noop() {
        let mut run = two_question_run();
        run.submit_answer("Hola");
        run.submit_answer("Gracias");

        let score = run.score;
        let index = run.current_index;
        let log_len = run.answers.len();

        run.submit_answer("Hola");

        assert_eq!(run.score, score);
        assert_eq!(run.current_index, index);
        assert_eq!(run.answers.len(), log_len);
    }

    #[test]
    fn percentage_is_zero_for_empty_run() {
        let run = QuizRun::new("English", "German", Vec::new());
        assert_eq!(run.percentage(), 0.0);
        assert!(run.is_complete());
        assert!(run.current_question().is_none());
    }

    #[test]
    fn all_correct_answers_score_full_percentage() {
        let mut run = two_question_run();
        run.submit_answer("Hola");
        run.submit_answer("Gracias");

        assert_eq!(run.score, 2);
        assert_eq!(run.percentage(), 100.0);
    }

    #[test]
    fn answer_log_records_submission_details() {
        let mut run = two_question_run();
        run.submit_answer("Adiós");

        let entry = &run.answers[0];
        assert_eq!(entry.question, "q1");
        assert_eq!(entry.user_answer, "Adiós");
        assert_eq!(entry.correct_answer, "Hola");
        assert!(!entry.is_correct);
    }
}

use crate::quiz::models::Question;

fn question(text: &str, options: [&str; 4], correct: &str) -> Question {
    Question {
        question: text.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        correct_answer: correct.to_string(),
    }
}

/// Static question sets used when the generative provider is unavailable or
/// returns unusable output. Lookup is case-insensitive on both language
/// names; at most `count` questions are returned, fewer when the table holds
/// fewer, and an unknown pair yields an empty list.
pub fn fallback_questions(
    mother_language: &str,
    learning_language: &str,
    count: usize,
) -> Vec<Question> {
    let mother = mother_language.to_lowercase();
    let learning = learning_language.to_lowercase();

    let mut questions = match (mother.as_str(), learning.as_str()) {
        ("english", "spanish") => vec![
            question(
                "How do you say 'Hello' in Spanish?",
                ["Hola", "Adiós", "Gracias", "Por favor"],
                "Hola",
            ),
            question(
                "How do you say 'Thank you' in Spanish?",
                ["Hola", "Adiós", "Gracias", "Por favor"],
                "Gracias",
            ),
            question(
                "How do you say 'Goodbye' in Spanish?",
                ["Hola", "Adiós", "Gracias", "Por favor"],
                "Adiós",
            ),
            question(
                "How do you say 'Please' in Spanish?",
                ["Hola", "Adiós", "Gracias", "Por favor"],
                "Por favor",
            ),
        ],
        ("english", "french") => vec![
            question(
                "How do you say 'Hello' in French?",
                ["Bonjour", "Au revoir", "Merci", "S'il vous plaît"],
                "Bonjour",
            ),
            question(
                "How do you say 'Thank you' in French?",
                ["Bonjour", "Au revoir", "Merci", "S'il vous plaît"],
                "Merci",
            ),
        ],
        ("english", "tamil") => vec![
            question(
                "How do you say 'Hello' in Tamil?",
                ["வணக்கம்", "போ", "நன்றி", "தயவு செய்து"],
                "வணக்கம்",
            ),
            question(
                "How do you say 'Thank you' in Tamil?",
                ["வணக்கம்", "போ", "நன்றி", "தயவு செய்து"],
                "நன்றி",
            ),
        ],
        ("tamil", "english") => vec![
            question(
                "ஆங்கிலத்தில் 'வணக்கம்' எப்படி சொல்வது?",
                ["Hello", "Goodbye", "Thank you", "Please"],
                "Hello",
            ),
            question(
                "ஆங்கிலத்தில் 'நன்றி' எப்படி சொல்வது?",
                ["Hello", "Goodbye", "Thank you", "Please"],
                "Thank you",
            ),
        ],
        _ => Vec::new(),
    };

    questions.truncate(count);
    questions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        let lower = fallback_questions("english", "spanish", 10);
        let mixed = fallback_questions("English", "SPANISH", 10);

        assert_eq!(lower.len(), 4);
        assert_eq!(lower, mixed);
    }

    #[test]
    fn spanish_set_holds_the_four_known_questions() {
        let questions = fallback_questions("English", "Spanish", 10);
        let answers: Vec<&str> = questions
            .iter()
            .map(|q| q.correct_answer.as_str())
            .collect();

        assert_eq!(answers, vec!["Hola", "Gracias", "Adiós", "Por favor"]);
    }

    #[test]
    fn result_is_truncated_to_count() {
        assert_eq!(fallback_questions("English", "Spanish", 2).len(), 2);
        assert_eq!(fallback_questions("English", "Spanish", 0).len(), 0);
    }

    #[test]
    fn fewer_than_count_is_not_an_error() {
        assert_eq!(fallback_questions("English", "French", 10).len(), 2);
    }

    #[test]
    fn unknown_pair_yields_empty_list() {
        assert!(fallback_questions("English", "German", 10).is_empty());
        assert!(fallback_questions("Spanish", "English", 10).is_empty());
    }
}

use crate::lesson::models::LessonContent;

fn vocabulary(words: [&str; 5]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

pub fn fallback_translation(language: &str) -> String {
    match language {
        "Spanish" => "¡Hola! ¿Cómo estás hoy?",
        "French" => "Bonjour ! Comment allez-vous aujourd'hui ?",
        "German" => "Hallo! Wie geht es dir heute?",
        "Tamil" => "வணக்கம்! இன்று நீங்கள் எப்படி இருக்கிறீர்கள்?",
        "Hindi" => "नमस्ते! आप आज कैसे हैं?",
        "Mandarin" => "你好！你今天好吗？",
        _ => "Hello! How are you today?",
    }
    .to_string()
}

pub fn fallback_vocabulary(language: &str) -> Vec<String> {
    match language {
        "Spanish" => vocabulary(["Hola", "Cómo", "Estás", "Hoy", "Bien"]),
        "French" => vocabulary(["Bonjour", "Comment", "Allez-vous", "Aujourd'hui", "Bien"]),
        "German" => vocabulary(["Hallo", "Wie", "Geht", "Heute", "Gut"]),
        "Tamil" => vocabulary(["வணக்கம்", "எப்படி", "இன்று", "நீங்கள்", "நன்றாக"]),
        "Hindi" => vocabulary(["नमस्ते", "कैसे", "आज", "आप", "अच्छा"]),
        "Mandarin" => vocabulary(["你好", "怎么", "今天", "你", "好"]),
        _ => vocabulary(["Hello", "How", "Today", "You", "Good"]),
    }
}

/// Static lesson handed out when the provider path fails.
pub fn fallback_lesson_content(language: &str) -> LessonContent {
    LessonContent {
        native_sentence: "Hello, how are you today?".to_string(),
        learning_sentence: fallback_translation(language),
        native_vocabulary: vocabulary(["Hello", "How", "Are", "You", "Today"]),
        learning_vocabulary: fallback_vocabulary(language),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_language_gets_translated_sentence() {
        let content = fallback_lesson_content("Spanish");

        assert_eq!(content.learning_sentence, "¡Hola! ¿Cómo estás hoy?");
        assert_eq!(content.learning_vocabulary.len(), 5);
        assert_eq!(content.learning_vocabulary[0], "Hola");
    }

    #[test]
    fn unknown_language_falls_back_to_english() {
        let content = fallback_lesson_content("Klingon");

        assert_eq!(content.learning_sentence, "Hello! How are you today?");
        assert_eq!(content.learning_vocabulary[0], "Hello");
    }
}

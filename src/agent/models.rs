use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

static RESPONSES: [&str; 8] = [
    "Hello! I'm your language learning assistant. How can I help you today?",
    "Great question! I recommend starting with basic vocabulary lessons.",
    "Practice makes perfect! Try taking a quiz to test your knowledge.",
    "I'm here to help you learn languages. What would you like to practice?",
    "Remember to review previous lessons to reinforce your learning!",
    "Language learning is a journey. Take it one step at a time!",
    "Try using the translation feature to practice sentence construction.",
    "Don't forget to practice speaking aloud for better pronunciation!",
];

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AgentAnalytics {
    pub completed_lessons: u32,
    pub streak_days: u32,
    pub average_score: u32,
}

#[derive(Debug, Deserialize)]
pub struct ChatMessageRequest {
    #[serde(default)]
    pub message: String,
}

/// Canned-response "agent". Picks uniformly from a fixed reply set and
/// fabricates analytics fresh on every call; nothing here reads user data
/// and nothing is persisted. Intentionally trivial.
pub struct ChatAgent;

impl ChatAgent {
    pub fn respond(&self, _message: &str) -> &'static str {
        let mut rng = ChaCha8Rng::from_os_rng();
        RESPONSES[rng.random_range(0..RESPONSES.len())]
    }

    pub fn analytics(&self) -> AgentAnalytics {
        let mut rng = ChaCha8Rng::from_os_rng();

        AgentAnalytics {
            completed_lessons: rng.random_range(0..=10),
            streak_days: rng.random_range(0..=30),
            average_score: rng.random_range(50..=95),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_comes_from_the_fixed_set() {
        let agent = ChatAgent;

        for _ in 0..50 {
            let response = agent.respond("does the input matter?");
            assert!(RESPONSES.contains(&response));
        }
    }

    #[test]
    fn analytics_stay_within_their_ranges() {
        let agent = ChatAgent;

        for _ in 0..50 {
            let analytics = agent.analytics();
            assert!(analytics.completed_lessons <= 10);
            assert!(analytics.streak_days <= 30);
            assert!((50..=95).contains(&analytics.average_score));
        }
    }
}

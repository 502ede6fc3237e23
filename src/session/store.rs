use dashmap::DashMap;
use uuid::Uuid;

use crate::quiz::session::QuizRun;

/// Per-login server side state, keyed by the bearer token handed out at
/// login. Holds the owning user and the transient quiz state, nothing else.
#[derive(Debug)]
pub struct UserSession {
    pub user_id: Uuid,
    pub quiz: Option<QuizRun>,
}

/// In-process session storage. Two requests carrying the same token (two
/// browser tabs) race with last-write-wins semantics on the quiz state; this
/// is an accepted limitation, not something the store guards against.
pub struct SessionStore {
    sessions: DashMap<Uuid, UserSession>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    pub fn create(&self, user_id: Uuid) -> Uuid {
        let token = Uuid::new_v4();
        self.sessions.insert(
            token,
            UserSession {
                user_id,
                quiz: None,
            },
        );

        token
    }

    pub fn user_for(&self, token: &Uuid) -> Option<Uuid> {
        self.sessions.get(token).map(|session| session.user_id)
    }

    pub fn remove(&self, token: &Uuid) {
        self.sessions.remove(token);
    }

    /// Replaces any quiz state already held by the session.
    pub fn put_quiz(&self, token: &Uuid, run: QuizRun) -> bool {
        match self.sessions.get_mut(token) {
            Some(mut session) => {
                session.quiz = Some(run);
                true
            }
            None => false,
        }
    }

    pub fn quiz(&self, token: &Uuid) -> Option<QuizRun> {
        self.sessions
            .get(token)
            .and_then(|session| session.quiz.clone())
    }

    pub fn with_quiz_mut<R>(&self, token: &Uuid, f: impl FnOnce(&mut QuizRun) -> R) -> Option<R> {
        let mut session = self.sessions.get_mut(token)?;
        session.quiz.as_mut().map(f)
    }

    /// Removes and returns the quiz state, leaving the login session alive.
    pub fn clear_quiz(&self, token: &Uuid) -> Option<QuizRun> {
        let mut session = self.sessions.get_mut(token)?;
        session.quiz.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::quiz::{models::Question, session::QuizRun};

    fn sample_run() -> QuizRun {
        QuizRun::new(
            "English",
            "Spanish",
            vec![Question {
                question: "q".to_string(),
                options: vec!["a".to_string(), "b".to_string()],
                correct_answer: "a".to_string(),
            }],
        )
    }

    #[test]
    fn create_and_resolve_token() {
        let store = SessionStore::new();
        let user_id = Uuid::new_v4();
        let token = store.create(user_id);

        assert_eq!(store.user_for(&token), Some(user_id));
        assert_eq!(store.user_for(&Uuid::new_v4()), None);
    }

    #[test]
    fn remove_invalidates_the_token() {
        let store = SessionStore::new();
        let token = store.create(Uuid::new_v4());

        store.remove(&token);
        assert_eq!(store.user_for(&token), None);
    }

    #[test]
    fn quiz_state_is_cleared_exactly_once() {
        let store = SessionStore::new();
        let token = store.create(Uuid::new_v4());

        assert!(store.put_quiz(&token, sample_run()));
        assert!(store.quiz(&token).is_some());

        assert!(store.clear_quiz(&token).is_some());
        assert!(store.clear_quiz(&token).is_none());
        assert!(store.quiz(&token).is_none());

        // Clearing the quiz must not log the user out.
        assert!(store.user_for(&token).is_some());
    }

    #[test]
    fn put_quiz_fails_for_unknown_token() {
        let store = SessionStore::new();
        assert!(!store.put_quiz(&Uuid::new_v4(), sample_run()));
    }

    #[test]
    fn with_quiz_mut_mutates_in_place() {
        let store = SessionStore::new();
        let token = store.create(Uuid::new_v4());
        store.put_quiz(&token, sample_run());

        let mutated = store.with_quiz_mut(&token, |run| run.submit_answer("a"));
        assert!(mutated.is_some());

        let run = store.quiz(&token).unwrap();
        assert_eq!(run.score, 1);
        assert_eq!(run.current_index, 1);
    }
}

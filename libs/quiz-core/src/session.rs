//! Resumable session state.

use crate::error::StoreError;
use serde::{Deserialize, Serialize};

/// One answered question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    /// Chosen label, `None` if the record carried no choice.
    pub choice: Option<char>,
    pub valid: bool,
}

/// Progress through a quiz.
///
/// `index` is the next unanswered question and always equals
/// `history.len()` between turns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub index: usize,
    pub history: Vec<AnswerRecord>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an answer and advance to the next question.
    pub fn record(&mut self, choice: char, valid: bool) {
        self.history.push(AnswerRecord {
            choice: Some(choice),
            valid,
        });
        self.index += 1;
    }

    /// Whether this state can resume a quiz of `len` questions.
    pub fn is_consistent(&self, len: usize) -> bool {
        self.history.len() == self.index && self.index <= len
    }

    pub fn correct_count(&self) -> usize {
        self.history.iter().filter(|r| r.valid).count()
    }
}

/// Storage for the single persisted session record.
pub trait SessionStore {
    /// Human readable location, used in user notices.
    fn location(&self) -> String;

    /// Read the saved record. `Ok(None)` when nothing is saved.
    fn read(&self) -> Result<Option<SessionState>, StoreError>;

    /// Replace the saved record.
    fn write(&self, state: &SessionState) -> Result<(), StoreError>;

    /// Delete the saved record. Returns `false` if there was none.
    fn remove(&self) -> Result<bool, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn record_advances_index() {
        let mut state = SessionState::new();
        state.record('A', true);
        state.record('C', false);
        assert_eq!(state.index, 2);
        assert_eq!(
            state.history,
            vec![
                AnswerRecord { choice: Some('A'), valid: true },
                AnswerRecord { choice: Some('C'), valid: false },
            ]
        );
        assert_eq!(state.correct_count(), 1);
    }

    #[test]
    fn serializes_to_compact_record() {
        let mut state = SessionState::new();
        state.record('B', true);
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"index":1,"history":[{"choice":"B","valid":true}]}"#);
    }

    #[test]
    fn deserializes_null_choice() {
        let state: SessionState =
            serde_json::from_str(r#"{"index":1,"history":[{"choice":null,"valid":false}]}"#).unwrap();
        assert_eq!(state.history[0].choice, None);
        assert!(state.is_consistent(3));
    }

    #[test]
    fn consistency_checks() {
        let state = SessionState {
            index: 2,
            history: vec![AnswerRecord { choice: Some('A'), valid: true }],
        };
        assert!(!state.is_consistent(10));

        let mut state = SessionState::new();
        state.record('A', true);
        state.record('A', true);
        assert!(state.is_consistent(2));
        assert!(!state.is_consistent(1));
    }
}

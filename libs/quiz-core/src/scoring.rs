//! Final score computation.

use crate::session::SessionState;

/// Informal grade of a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    /// Above 75%.
    High,
    /// Above 50%.
    Medium,
    Low,
}

/// Correct answers over answered questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
}

impl Score {
    pub fn from_session(state: &SessionState) -> Self {
        Self {
            correct: state.correct_count(),
            total: state.history.len(),
        }
    }

    /// Rounded percentage, `0` when nothing was answered.
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (self.correct as f64 * 100.0 / self.total as f64).round() as u32
    }

    pub fn band(&self) -> ScoreBand {
        match self.percent() {
            p if p > 75 => ScoreBand::High,
            p if p > 50 => ScoreBand::Medium,
            _ => ScoreBand::Low,
        }
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{} ({}%)", self.correct, self.total, self.percent())
    }
}

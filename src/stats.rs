//! Derived counters and the read-only view handed to front-ends.

use crate::session::Session;
use serde::Serialize;

/// Counters shown alongside the board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub score: u32,
    pub correct_count: usize,
    pub remaining_count: usize,
}

impl Stats {
    #[must_use]
    pub fn from_session(session: &Session) -> Self {
        let correct_count = session.found().len();
        Self {
            score: session.score(),
            correct_count,
            remaining_count: session.answers().len().saturating_sub(correct_count),
        }
    }
}

/// State of the most recent question fetch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerTile {
    pub text: String,
    pub is_found: bool,
}

/// Everything a front-end needs to draw one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RoundSnapshot {
    pub question: String,
    pub answer_list: Vec<AnswerTile>,
    pub found_list: Vec<String>,
    pub score: u32,
    pub correct_count: usize,
    pub remaining_count: usize,
    pub is_complete: bool,
    pub can_submit: bool,
    pub load_status: LoadStatus,
}

impl RoundSnapshot {
    /// Projects `session` (if any) into a snapshot.
    #[must_use]
    pub fn project(session: Option<&Session>, load_status: LoadStatus, can_submit: bool) -> Self {
        let Some(session) = session else {
            return Self {
                load_status,
                ..Self::default()
            };
        };

        let stats = Stats::from_session(session);
        Self {
            question: session.question().to_string(),
            answer_list: session
                .answers()
                .iter()
                .map(|answer| AnswerTile {
                    text: answer.clone(),
                    is_found: session.is_found(answer),
                })
                .collect(),
            found_list: session.found().to_vec(),
            score: stats.score,
            correct_count: stats.correct_count,
            remaining_count: stats.remaining_count,
            is_complete: session.is_complete(),
            can_submit,
            load_status,
        }
    }

    #[must_use]
    pub fn stats(&self) -> Stats {
        Stats {
            score: self.score,
            correct_count: self.correct_count,
            remaining_count: self.remaining_count,
        }
    }
}

//! One round of play: a question, its answers and what has been found so far.

use crate::error::{GameError, Result};
use crate::normalize::normalize_answers;

/// Points awarded for each newly found answer.
pub const REWARD_PER_ANSWER: u32 = 10;

/// Outcome of [`Session::mark_found`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoundResult {
    NewlyFound,
    AlreadyFound,
    NotAnAnswer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    question: String,
    answers: Vec<String>,
    found: Vec<String>,
    score: u32,
}

impl Session {
    /// Builds a session from a raw question and answer list.
    ///
    /// Answers are normalized and deduplicated, keeping the order in which
    /// they first appear. Fails when the question is blank or no answer
    /// survives normalization.
    pub fn create<I, S>(question: &str, raw_answers: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let question = question.trim();
        if question.is_empty() {
            return Err(GameError::InvalidPayload("question is empty".to_string()));
        }

        let answers = normalize_answers(raw_answers);
        if answers.is_empty() {
            return Err(GameError::InvalidPayload("answer list is empty".to_string()));
        }

        Ok(Self {
            question: question.to_string(),
            answers,
            found: Vec::new(),
            score: 0,
        })
    }

    /// Credits `guess` if it is an answer that has not been found yet.
    ///
    /// `guess` must already be normalized. Only `NewlyFound` changes state.
    pub fn mark_found(&mut self, guess: &str) -> FoundResult {
        if self.is_found(guess) {
            return FoundResult::AlreadyFound;
        }
        if !self.contains(guess) {
            return FoundResult::NotAnAnswer;
        }
        self.found.push(guess.to_string());
        self.score += REWARD_PER_ANSWER;
        FoundResult::NewlyFound
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.found.len() == self.answers.len()
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    /// Answers in display order.
    #[must_use]
    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    /// Found answers in the order they were found.
    #[must_use]
    pub fn found(&self) -> &[String] {
        &self.found
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn contains(&self, answer: &str) -> bool {
        self.answers.iter().any(|a| a == answer)
    }

    #[must_use]
    pub fn is_found(&self, answer: &str) -> bool {
        self.found.iter().any(|a| a == answer)
    }
}

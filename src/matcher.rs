use crate::normalize::normalize;
use crate::session::{FoundResult, Session};

/// Why a submission was turned away before classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Blank or whitespace-only input.
    EmptyInput,
    /// Another submission is still being applied.
    Busy,
    /// No round has loaded yet.
    NoRound,
    /// A new round is being fetched.
    Loading,
    /// The round the guess was made against has been replaced.
    RoundChanged,
}

/// Shown for a guess that was already credited this round.
pub const ALREADY_FOUND_MESSAGE: &str = "Already found!";

/// Classification of one submitted guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Rejected(Rejection),
    Correct(String),
    Duplicate(String),
    Incorrect,
}

impl Verdict {
    /// True if this verdict changed the session.
    #[must_use]
    pub fn is_credit(&self) -> bool {
        matches!(self, Self::Correct(_))
    }
}

/// Classifies `raw` against `session`, crediting it when newly found.
///
/// Checks run in a fixed order: empty, already found, newly found, incorrect.
/// A guess that is a valid answer but already found is a `Duplicate`.
pub fn classify(raw: &str, session: &mut Session) -> Verdict {
    let guess = normalize(raw);
    if guess.is_empty() {
        return Verdict::Rejected(Rejection::EmptyInput);
    }
    classify_normalized(guess, session)
}

/// Same as [`classify`] for a guess that is already normalized and non-empty.
pub fn classify_normalized(guess: String, session: &mut Session) -> Verdict {
    if session.is_found(&guess) {
        return Verdict::Duplicate(guess);
    }
    match session.mark_found(&guess) {
        FoundResult::NewlyFound => Verdict::Correct(guess),
        FoundResult::AlreadyFound => Verdict::Duplicate(guess),
        FoundResult::NotAnAnswer => Verdict::Incorrect,
    }
}

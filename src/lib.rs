// Library interface for family100
// This allows integration tests to access internal modules

pub mod cli;
pub mod error;
pub mod game_state;
pub mod loader;
pub mod logging;
pub mod matcher;
pub mod normalize;
pub mod payload;
pub mod session;
pub mod stats;
pub mod tui;

// Re-export commonly used items for easier testing
pub use error::{GameError, Result};
pub use game_state::{Game, GameInterface, LoadOutcome, UserAction, game_loop};
pub use loader::{FileLoader, HttpLoader, QuestionLoader};
pub use matcher::{Rejection, Verdict, classify};
pub use normalize::normalize;
pub use payload::{RawPayload, parse_payload};
pub use session::{FoundResult, REWARD_PER_ANSWER, Session};
pub use stats::{RoundSnapshot, Stats};

use crate::error::GameError;
use crate::game_state::{GameInterface, UserAction};
use crate::loader::{DEFAULT_API_URL, DEFAULT_TIMEOUT};
use crate::matcher::{ALREADY_FOUND_MESSAGE, Rejection, Verdict};
use crate::stats::RoundSnapshot;
use clap::Parser;
use std::io::BufRead;
use std::path::PathBuf;
use std::time::Duration;

/// Family 100 trivia in the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Question API endpoint
    #[arg(long = "api-url", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Play questions from a local JSON file instead of the API
    #[arg(short = 'q', long = "questions", conflicts_with = "api_url")]
    pub questions_path: Option<PathBuf>,

    /// HTTP request timeout in seconds
    #[arg(long = "timeout", default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub timeout_secs: u64,

    /// Line-oriented interface instead of the full-screen one
    #[arg(long)]
    pub plain: bool,

    /// Where to write the log file
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

// UI Input/Output functions

pub enum LineInput {
    Answer(String),
    Next,
    Clear,
    Exit,
}

const NEXT_COMMAND: &str = "/next";
const CLEAR_COMMAND: &str = "/clear";
const EXIT_COMMAND: &str = "/exit";

pub fn parse_line(line: &str) -> LineInput {
    let trimmed = line.trim();
    match trimmed.to_lowercase().as_str() {
        NEXT_COMMAND => LineInput::Next,
        CLEAR_COMMAND => LineInput::Clear,
        EXIT_COMMAND => LineInput::Exit,
        _ => LineInput::Answer(trimmed.to_string()),
    }
}

/// Reads one line. End of input counts as `/exit`.
pub fn read_line<R: BufRead>(reader: &mut R) -> LineInput {
    println!("\nYour answer ({NEXT_COMMAND} new question, {CLEAR_COMMAND}, {EXIT_COMMAND}):");
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) | Err(_) => LineInput::Exit,
        Ok(_) => parse_line(&input),
    }
}

pub fn display_round(snapshot: &RoundSnapshot) {
    println!("\nQuestion: {}", snapshot.question);
    display_board(snapshot);
    display_stats(snapshot);
}

pub fn display_board(snapshot: &RoundSnapshot) {
    for (i, tile) in snapshot.answer_list.iter().enumerate() {
        if tile.is_found {
            println!("  {}. {}", i + 1, tile.text.to_uppercase());
        } else {
            println!("  {}. ______", i + 1);
        }
    }
}

pub fn display_stats(snapshot: &RoundSnapshot) {
    println!(
        "Score: {} | Correct: {} | Remaining: {}",
        snapshot.score, snapshot.correct_count, snapshot.remaining_count
    );
}

#[must_use]
pub fn verdict_message(verdict: &Verdict, snapshot: &RoundSnapshot) -> Option<String> {
    match verdict {
        Verdict::Correct(_) if snapshot.is_complete => {
            Some("Congratulations! All answers found!".to_string())
        }
        Verdict::Correct(answer) => Some(format!("+10 points! Found: {}", answer.to_uppercase())),
        Verdict::Duplicate(_) => Some(ALREADY_FOUND_MESSAGE.to_string()),
        Verdict::Incorrect => Some("Wrong answer, try again!".to_string()),
        Verdict::Rejected(Rejection::NoRound) => {
            Some("No question loaded. Type /next to try again.".to_string())
        }
        Verdict::Rejected(Rejection::RoundChanged) => {
            Some("The question changed before your answer was checked.".to_string())
        }
        Verdict::Rejected(Rejection::EmptyInput | Rejection::Busy | Rejection::Loading) => None,
    }
}

/// Line-mode implementation of [`GameInterface`] over any `BufRead`.
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn display_loading(&mut self) {
        println!("Fetching a new question...");
    }

    fn display_round(&mut self, snapshot: &RoundSnapshot) {
        println!("New question ready!");
        display_round(snapshot);
    }

    fn display_load_failure(&mut self, error: &GameError, snapshot: &RoundSnapshot) {
        println!("{} ({error}).", error.user_message());
        if snapshot.question.is_empty() {
            println!("Type {NEXT_COMMAND} to try again.");
        } else {
            println!("Keeping the previous question.");
            display_round(snapshot);
        }
    }

    fn display_verdict(&mut self, verdict: &Verdict, snapshot: &RoundSnapshot) {
        if let Some(message) = verdict_message(verdict, snapshot) {
            println!("{message}");
        }
        if verdict.is_credit() {
            display_board(snapshot);
            display_stats(snapshot);
        }
    }

    fn read_action(&mut self) -> Option<UserAction> {
        match read_line(&mut self.reader) {
            LineInput::Answer(text) => Some(UserAction::Submit(text)),
            LineInput::Next => Some(UserAction::NewRound),
            LineInput::Exit => Some(UserAction::Exit),
            LineInput::Clear => {
                println!("Input cleared.");
                None
            }
        }
    }

    fn display_exit_message(&mut self) {
        println!("Exiting.");
    }
}

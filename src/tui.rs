//! TUI (Terminal User Interface) module for Family 100
//!
//! This module provides an interactive terminal interface using Ratatui.
//!
//! # Architecture
//! - `TuiView`: what is on screen, key handling and rendering (no terminal I/O)
//! - `TuiInterface`: owns the terminal and drives `TuiView` for the game loop
//!
//! # State Machine
//! - `Loading` → `Answering` → `RoundOver` (all answers found)
//! - `Loading` → `LoadFailed` when no round could be loaded
//! - Ctrl+N from any non-loading state goes back to `Loading`

use crate::error::GameError;
use crate::game_state::{GameInterface, UserAction};
use crate::matcher::{ALREADY_FOUND_MESSAGE, Rejection, Verdict};
use crate::stats::{LoadStatus, RoundSnapshot};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;
use std::time::{Duration, Instant};

const MAX_INPUT_CHARS: usize = 50;
const NOTICE_TTL: Duration = Duration::from_secs(3);
const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const ASCII_CONTROL_CHAR_THRESHOLD: u32 = 32;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const WARNING_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);
const FOUND_TILE_STYLE: Style = Style::new().fg(Color::Black).bg(Color::Green);
const HIDDEN_TILE_STYLE: Style = Style::new().fg(Color::White).bg(Color::DarkGray);

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum NoticeLevel {
    Success,
    Error,
    Warning,
    Info,
}

impl NoticeLevel {
    fn style(self) -> Style {
        match self {
            Self::Success => SUCCESS_STYLE,
            Self::Error => ERROR_STYLE,
            Self::Warning => WARNING_STYLE,
            Self::Info => MESSAGE_STYLE,
        }
    }
}

#[derive(Debug)]
struct Notice {
    level: NoticeLevel,
    text: String,
    shown_at: Instant,
}

/// Contents of the result box under the input line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ResultBox {
    Waiting,
    Correct(String),
    Duplicate(String),
    Incorrect,
    Complete,
}

impl ResultBox {
    fn lines(&self) -> (&'static str, Style, String) {
        match self {
            Self::Waiting => ("●", MESSAGE_STYLE, "Submit an answer to check it".to_string()),
            Self::Correct(answer) => (
                "✓ CORRECT!",
                SUCCESS_STYLE,
                format!("You found: \"{}\"", answer.to_uppercase()),
            ),
            Self::Duplicate(answer) => (
                "● ALREADY FOUND",
                WARNING_STYLE,
                format!("\"{}\" is already on the board", answer.to_uppercase()),
            ),
            Self::Incorrect => ("✕ WRONG", ERROR_STYLE, "Answer not found. Try again!".to_string()),
            Self::Complete => (
                "✓ CORRECT!",
                SUCCESS_STYLE,
                "CONGRATULATIONS! Every answer has been found!".to_string(),
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TuiState {
    Loading,
    Answering,
    /// Every answer found; the board stays visible until a new round.
    RoundOver,
    /// No round could be loaded and none was loaded before.
    LoadFailed,
}

/// Screen state and input handling, independent of the terminal.
#[derive(Debug)]
pub struct TuiView {
    snapshot: RoundSnapshot,
    input: String,
    state: TuiState,
    result: ResultBox,
    notice: Option<Notice>,
}

impl Default for TuiView {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiView {
    #[must_use]
    pub fn new() -> Self {
        Self {
            snapshot: RoundSnapshot::default(),
            input: String::new(),
            state: TuiState::Loading,
            result: ResultBox::Waiting,
            notice: None,
        }
    }

    fn notify(&mut self, level: NoticeLevel, text: impl Into<String>) {
        self.notice = Some(Notice {
            level,
            text: text.into(),
            shown_at: Instant::now(),
        });
    }

    fn expire_notice(&mut self, now: Instant) {
        if self
            .notice
            .as_ref()
            .is_some_and(|n| now.duration_since(n.shown_at) >= NOTICE_TTL)
        {
            self.notice = None;
        }
    }

    fn state_for(snapshot: &RoundSnapshot) -> TuiState {
        if snapshot.question.is_empty() {
            TuiState::LoadFailed
        } else if snapshot.is_complete {
            TuiState::RoundOver
        } else {
            TuiState::Answering
        }
    }

    pub fn show_loading(&mut self) {
        self.state = TuiState::Loading;
        self.snapshot.load_status = LoadStatus::Loading;
        self.input.clear();
    }

    pub fn show_round(&mut self, snapshot: &RoundSnapshot) {
        self.snapshot = snapshot.clone();
        self.state = Self::state_for(snapshot);
        self.result = ResultBox::Waiting;
        self.input.clear();
        self.notify(NoticeLevel::Success, "New question ready!");
    }

    pub fn show_load_failure(&mut self, error: &GameError, snapshot: &RoundSnapshot) {
        self.snapshot = snapshot.clone();
        self.state = Self::state_for(snapshot);
        self.notify(NoticeLevel::Error, error.user_message());
    }

    pub fn show_verdict(&mut self, verdict: &Verdict, snapshot: &RoundSnapshot) {
        self.snapshot = snapshot.clone();
        match verdict {
            Verdict::Correct(answer) => {
                self.input.clear();
                if snapshot.is_complete {
                    self.result = ResultBox::Complete;
                    self.state = TuiState::RoundOver;
                    self.notify(NoticeLevel::Success, "🎉 CONGRATULATIONS! All answers found!");
                } else {
                    self.result = ResultBox::Correct(answer.clone());
                    self.notify(
                        NoticeLevel::Success,
                        format!("+10 points! Found: {}", answer.to_uppercase()),
                    );
                }
            }
            Verdict::Duplicate(answer) => {
                self.input.clear();
                self.result = ResultBox::Duplicate(answer.clone());
                self.notify(NoticeLevel::Warning, ALREADY_FOUND_MESSAGE);
            }
            Verdict::Incorrect => {
                // Input stays so the player can fix a typo.
                self.result = ResultBox::Incorrect;
                self.notify(NoticeLevel::Error, "Wrong answer, try again!");
            }
            Verdict::Rejected(Rejection::NoRound) => {
                self.notify(NoticeLevel::Info, "No question loaded. Press Ctrl+N.");
            }
            Verdict::Rejected(Rejection::RoundChanged) => {
                self.notify(NoticeLevel::Info, "The question changed, answer again.");
            }
            Verdict::Rejected(Rejection::EmptyInput | Rejection::Busy | Rejection::Loading) => {}
        }
    }

    fn clear_input(&mut self) {
        self.input.clear();
        info_log!("clear_input() - Input cleared");
    }

    fn has_modifier_keys(key: &KeyEvent) -> bool {
        key.modifiers.contains(KeyModifiers::ALT) || key.modifiers.contains(KeyModifiers::CONTROL)
    }

    /// Applies one key press; returns an action for the game loop if any.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<UserAction> {
        debug_log!("handle_key() - {:?} in {:?}", key.code, self.state);

        if key.code == KeyCode::Esc {
            info_log!("handle_key() - ESC pressed, returning Exit");
            return Some(UserAction::Exit);
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('n' | 'N') if self.state != TuiState::Loading => {
                    Some(UserAction::NewRound)
                }
                KeyCode::Char('l' | 'L') => {
                    self.clear_input();
                    None
                }
                _ => None,
            };
        }

        match self.state {
            TuiState::Loading => None,
            TuiState::Answering => self.handle_answer_input(key),
            TuiState::RoundOver | TuiState::LoadFailed => match key.code {
                KeyCode::Char('n' | 'N') => Some(UserAction::NewRound),
                _ => None,
            },
        }
    }

    fn handle_answer_input(&mut self, key: KeyEvent) -> Option<UserAction> {
        match key.code {
            KeyCode::Char(c) if !Self::has_modifier_keys(&key) => {
                if self.input.chars().count() < MAX_INPUT_CHARS {
                    self.input.push(c);
                } else {
                    debug_log!("handle_answer_input() - Input full, dropping '{}'", c);
                }
                None
            }
            KeyCode::Backspace => {
                self.input.pop();
                None
            }
            KeyCode::Enter if !self.input.trim().is_empty() && self.snapshot.can_submit => {
                info_log!("handle_answer_input() - Submitting '{}'", self.input);
                Some(UserAction::Submit(self.input.clone()))
            }
            _ => None,
        }
    }

    /// Render the complete UI layout.
    pub fn render(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(4), // Question
                Constraint::Min(6),    // Answer board
                Constraint::Length(3), // Input
                Constraint::Length(4), // Result + stats
                Constraint::Length(3), // Found list
                Constraint::Length(3), // Status line
                Constraint::Length(3), // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0]);
        self.render_question(f, chunks[1]);
        self.render_board(f, chunks[2]);
        self.render_input(f, chunks[3]);
        self.render_result_and_stats(f, chunks[4]);
        self.render_found(f, chunks[5]);
        self.render_status(f, chunks[6]);
        self.render_instructions(f, chunks[7]);
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new("FAMILY 100")
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_question(&self, f: &mut Frame, area: Rect) {
        let text = match self.state {
            TuiState::Loading => "Fetching question...",
            TuiState::LoadFailed => "Failed to load question. Try again later.",
            TuiState::Answering | TuiState::RoundOver => self.snapshot.question.as_str(),
        };
        let paragraph = Paragraph::new(text)
            .block(Block::default().title("Question").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn tile_line(index: usize, text: &str, is_found: bool) -> Line<'static> {
        let number = index + 1;
        if is_found {
            Line::from(vec![Span::styled(
                format!(" {number:>2}. {} ", text.to_uppercase()),
                FOUND_TILE_STYLE,
            )])
        } else {
            Line::from(vec![Span::styled(
                format!(" {number:>2}. {} ", "?".repeat(6)),
                HIDDEN_TILE_STYLE,
            )])
        }
    }

    fn render_board(&self, f: &mut Frame, area: Rect) {
        let block = Block::default().title("Answers").borders(Borders::ALL);
        let inner = block.inner(area);
        f.render_widget(block, area);

        let tiles = &self.snapshot.answer_list;
        let split = tiles.len().div_ceil(2);
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(inner);

        for (column, range) in [(0, 0..split), (1, split..tiles.len())] {
            let lines: Vec<Line> = tiles[range.clone()]
                .iter()
                .enumerate()
                .map(|(offset, tile)| Self::tile_line(range.start + offset, &tile.text, tile.is_found))
                .collect();
            f.render_widget(Paragraph::new(lines), columns[column]);
        }
    }

    fn render_input(&self, f: &mut Frame, area: Rect) {
        let count = self.input.chars().count();
        let counter_style = if count >= MAX_INPUT_CHARS {
            ERROR_STYLE
        } else {
            Style::default().fg(Color::Gray)
        };
        let title = Line::from(vec![
            Span::raw("Your answer "),
            Span::styled(format!("({count}/{MAX_INPUT_CHARS})"), counter_style),
        ]);
        let cursor = if self.state == TuiState::Answering { "_" } else { "" };
        let paragraph = Paragraph::new(format!("{}{cursor}", self.input))
            .block(Block::default().title(title).borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_result_and_stats(&self, f: &mut Frame, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(area);

        let (title, style, message) = self.result.lines();
        let result = Paragraph::new(vec![
            Line::from(Span::styled(title, style)),
            Line::from(message),
        ])
        .block(Block::default().title("Result").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
        f.render_widget(result, columns[0]);

        let stats = self.snapshot.stats();
        let stats = Paragraph::new(vec![
            Line::from(vec![
                Span::raw("Score: "),
                Span::styled(stats.score.to_string(), SUCCESS_STYLE),
            ]),
            Line::from(format!(
                "Correct: {}  Remaining: {}",
                stats.correct_count, stats.remaining_count
            )),
        ])
        .block(Block::default().title("Stats").borders(Borders::ALL));
        f.render_widget(stats, columns[1]);
    }

    fn render_found(&self, f: &mut Frame, area: Rect) {
        let found = self
            .snapshot
            .found_list
            .iter()
            .map(|a| a.to_uppercase())
            .collect::<Vec<_>>()
            .join(", ");
        let paragraph = Paragraph::new(found)
            .block(Block::default().title("Found").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_status(&self, f: &mut Frame, area: Rect) {
        let (api, api_style) = match self.snapshot.load_status {
            LoadStatus::Idle => ("API: idle", MESSAGE_STYLE),
            LoadStatus::Loading => ("API: fetching question...", Style::new().fg(Color::Gray)),
            LoadStatus::Ready => ("API: Family 100 API", HEADER_STYLE),
            LoadStatus::Failed => ("API: fetch failed", ERROR_STYLE),
        };
        let mut spans = vec![Span::styled(api, api_style)];
        if let Some(notice) = &self.notice {
            spans.push(Span::raw("  |  "));
            spans.push(Span::styled(notice.text.clone(), notice.level.style()));
        }
        let paragraph =
            Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    fn render_instructions(&self, f: &mut Frame, area: Rect) {
        let text = match self.state {
            TuiState::Loading => "Loading... | ESC: Quit",
            TuiState::Answering => {
                "Type your answer | ENTER: Submit | Ctrl+L: Clear | Ctrl+N: New question | ESC: Quit"
            }
            TuiState::RoundOver | TuiState::LoadFailed => "N: New question | ESC: Quit",
        };

        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }
}

/// Main TUI interface component.
///
/// Manages terminal setup and teardown and feeds terminal events into a
/// [`TuiView`].
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    view: TuiView,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal setup complete: raw mode, alternate screen, cursor hidden");

        Ok(Self {
            terminal,
            view: TuiView::new(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let view = &self.view;
        self.terminal.draw(|f| view.render(f))?;
        Ok(())
    }

    /// Log and handle draw errors appropriately
    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    /// Waits up to one poll interval for a key press.
    fn next_key(&mut self) -> Result<Option<KeyEvent>, io::Error> {
        if !event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) => {
                // Only process Press events, ignore Release and Repeat to avoid double input
                if key.kind != event::KeyEventKind::Press {
                    return Ok(None);
                }
                // Garbage from escape sequences (e.g. when alt-tabbing)
                if let KeyCode::Char(c) = key.code
                    && (c == '\u{FFFD}' || (c as u32) < ASCII_CONTROL_CHAR_THRESHOLD)
                {
                    debug_log!("next_key() - Ignoring invalid character: {:?}", c);
                    return Ok(None);
                }
                Ok(Some(key))
            }
            other => {
                debug_log!("next_key() - Ignoring event: {:?}", other);
                Ok(None)
            }
        }
    }
}

impl GameInterface for TuiInterface {
    fn display_loading(&mut self) {
        self.view.show_loading();
        self.draw_or_log();
    }

    fn display_round(&mut self, snapshot: &RoundSnapshot) {
        self.view.show_round(snapshot);
        self.draw_or_log();
    }

    fn display_load_failure(&mut self, error: &GameError, snapshot: &RoundSnapshot) {
        self.view.show_load_failure(error, snapshot);
        self.draw_or_log();
    }

    fn display_verdict(&mut self, verdict: &Verdict, snapshot: &RoundSnapshot) {
        self.view.show_verdict(verdict, snapshot);
        self.draw_or_log();
    }

    fn read_action(&mut self) -> Option<UserAction> {
        loop {
            self.view.expire_notice(Instant::now());
            if self.draw().is_err() {
                info_log!("read_action() - Draw failed, returning Exit");
                return Some(UserAction::Exit);
            }

            match self.next_key() {
                Ok(Some(key)) => {
                    if let Some(action) = self.view.handle_key(key) {
                        info_log!("read_action() - Action: {:?}", action);
                        return Some(action);
                    }
                }
                Ok(None) => {}
                Err(_e) => {
                    info_log!("read_action() - Error handling input, returning Exit");
                    return Some(UserAction::Exit);
                }
            }
        }
    }

    fn display_exit_message(&mut self) {
        self.view.notify(NoticeLevel::Info, "Exiting...");
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;
    use ratatui::backend::TestBackend;

    fn snapshot(found: &[&str]) -> RoundSnapshot {
        let mut session = Session::create("Hewan peliharaan", ["kucing", "anjing"]).unwrap();
        for f in found {
            session.mark_found(f);
        }
        RoundSnapshot::project(Some(&session), LoadStatus::Ready, true)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(view: &mut TuiView, text: &str) {
        for c in text.chars() {
            assert_eq!(view.handle_key(key(KeyCode::Char(c))), None);
        }
    }

    fn rendered(view: &TuiView) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 32)).unwrap();
        terminal.draw(|f| view.render(f)).unwrap();
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn ready_view() -> TuiView {
        let mut view = TuiView::new();
        view.show_loading();
        view.show_round(&snapshot(&[]));
        view
    }

    #[test]
    fn test_typing_and_submitting() {
        let mut view = ready_view();
        type_text(&mut view, "Kucing");
        assert_eq!(view.input, "Kucing");
        assert_eq!(
            view.handle_key(key(KeyCode::Enter)),
            Some(UserAction::Submit("Kucing".into()))
        );
    }

    #[test]
    fn test_blank_enter_is_ignored() {
        let mut view = ready_view();
        type_text(&mut view, "   ");
        assert_eq!(view.handle_key(key(KeyCode::Enter)), None);
    }

    #[test]
    fn test_backspace_and_clear() {
        let mut view = ready_view();
        type_text(&mut view, "abc");
        view.handle_key(key(KeyCode::Backspace));
        assert_eq!(view.input, "ab");
        assert_eq!(view.handle_key(ctrl('l')), None);
        assert!(view.input.is_empty());
    }

    #[test]
    fn test_input_capped_at_max_chars() {
        let mut view = ready_view();
        type_text(&mut view, &"a".repeat(MAX_INPUT_CHARS + 5));
        assert_eq!(view.input.chars().count(), MAX_INPUT_CHARS);
    }

    #[test]
    fn test_escape_exits_and_ctrl_n_starts_round() {
        let mut view = ready_view();
        assert_eq!(view.handle_key(key(KeyCode::Esc)), Some(UserAction::Exit));
        assert_eq!(view.handle_key(ctrl('n')), Some(UserAction::NewRound));
    }

    #[test]
    fn test_loading_ignores_typing_and_new_round() {
        let mut view = TuiView::new();
        view.show_loading();
        assert_eq!(view.handle_key(key(KeyCode::Char('a'))), None);
        assert_eq!(view.handle_key(ctrl('n')), None);
        assert!(view.input.is_empty());
    }

    #[test]
    fn test_correct_verdict_clears_input_and_completes() {
        let mut view = ready_view();
        type_text(&mut view, "kucing");
        view.show_verdict(&Verdict::Correct("kucing".into()), &snapshot(&["kucing"]));
        assert!(view.input.is_empty());
        assert_eq!(view.result, ResultBox::Correct("kucing".into()));
        assert_eq!(view.state, TuiState::Answering);

        view.show_verdict(
            &Verdict::Correct("anjing".into()),
            &snapshot(&["kucing", "anjing"]),
        );
        assert_eq!(view.result, ResultBox::Complete);
        assert_eq!(view.state, TuiState::RoundOver);
        assert_eq!(view.handle_key(key(KeyCode::Char('n'))), Some(UserAction::NewRound));
    }

    #[test]
    fn test_duplicate_verdict_uses_shared_message() {
        let mut view = ready_view();
        type_text(&mut view, "kucing");
        view.show_verdict(&Verdict::Duplicate("kucing".into()), &snapshot(&["kucing"]));
        assert!(view.input.is_empty());
        let notice = view.notice.as_ref().unwrap();
        assert_eq!(notice.text, ALREADY_FOUND_MESSAGE);
        assert_eq!(notice.level, NoticeLevel::Warning);
    }

    #[test]
    fn test_incorrect_verdict_keeps_input() {
        let mut view = ready_view();
        type_text(&mut view, "sapi");
        view.show_verdict(&Verdict::Incorrect, &snapshot(&[]));
        assert_eq!(view.input, "sapi");
        assert_eq!(view.result, ResultBox::Incorrect);
        assert_eq!(view.notice.as_ref().unwrap().level, NoticeLevel::Error);
    }

    #[test]
    fn test_load_failure_without_round() {
        let mut view = TuiView::new();
        view.show_loading();
        let empty = RoundSnapshot::project(None, LoadStatus::Failed, false);
        view.show_load_failure(&GameError::Transport("HTTP 500".into()), &empty);
        assert_eq!(view.state, TuiState::LoadFailed);
        assert_eq!(view.handle_key(key(KeyCode::Char('n'))), Some(UserAction::NewRound));
        assert!(rendered(&view).contains("Failed to load question"));
    }

    #[test]
    fn test_notice_expires() {
        let mut view = ready_view();
        assert!(view.notice.is_some());
        let shown_at = view.notice.as_ref().unwrap().shown_at;
        view.expire_notice(shown_at + NOTICE_TTL / 2);
        assert!(view.notice.is_some());
        view.expire_notice(shown_at + NOTICE_TTL);
        assert!(view.notice.is_none());
    }

    #[test]
    fn test_render_masks_unfound_answers() {
        let mut view = ready_view();
        view.show_verdict(&Verdict::Correct("anjing".into()), &snapshot(&["anjing"]));
        let screen = rendered(&view);
        assert!(screen.contains("FAMILY 100"));
        assert!(screen.contains("Hewan peliharaan"));
        assert!(screen.contains("ANJING"));
        assert!(!screen.contains("KUCING"));
        assert!(screen.contains("??????"));
        assert!(screen.contains("Score: 10"));
        assert!(screen.contains("Remaining: 1"));
    }

    #[test]
    fn test_render_input_counter() {
        let mut view = ready_view();
        type_text(&mut view, "abc");
        assert!(rendered(&view).contains("(3/50)"));
    }
}

use crate::error::{GameError, Result};
use crate::loader::QuestionLoader;
use crate::matcher::{Rejection, Verdict, classify_normalized};
use crate::normalize::normalize;
use crate::payload::RawPayload;
use crate::session::Session;
use crate::stats::{LoadStatus, RoundSnapshot};
use log::{debug, info, warn};

/// Actions a front-end hands back to the game loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Submit(String),
    NewRound,
    Exit,
}

/// Identifies one load request. Only the newest ticket may apply its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// What happened to a finished load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    Failed(GameError),
    /// A newer load was started after this one; the result was dropped.
    Stale,
}

/// Submission state machine. A new submission is only accepted from `Idle`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
}

/// A guess that has been accepted for classification but not applied yet.
///
/// Bound to the round it was begun in; it is never applied to another one.
#[derive(Debug, PartialEq, Eq)]
pub struct Submission {
    guess: String,
    round: u64,
}

impl Submission {
    #[must_use]
    pub fn guess(&self) -> &str {
        &self.guess
    }
}

/// Owns the active round and every transition on it.
#[derive(Debug, Default)]
pub struct Game {
    session: Option<Session>,
    load_status: LoadStatus,
    latest_ticket: u64,
    /// Ticket of the load that produced the current session.
    round: u64,
    submit_state: SubmitState,
}

impl Game {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a load. The current session stays in place until a newer
    /// result is applied.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.latest_ticket += 1;
        self.load_status = LoadStatus::Loading;
        debug!("Load #{} started", self.latest_ticket);
        LoadTicket(self.latest_ticket)
    }

    /// Applies the result of the load identified by `ticket`.
    ///
    /// A session is only replaced when the payload yields a valid session.
    /// On failure any previous session is left exactly as it was.
    pub fn finish_load(&mut self, ticket: LoadTicket, result: Result<RawPayload>) -> LoadOutcome {
        if ticket.0 != self.latest_ticket {
            warn!(
                "Discarding stale load #{} (latest is #{})",
                ticket.0, self.latest_ticket
            );
            return LoadOutcome::Stale;
        }

        match result.and_then(|payload| Session::create(&payload.question, payload.answers)) {
            Ok(session) => {
                info!(
                    "Round ready: {:?} with {} answers",
                    session.question(),
                    session.answers().len()
                );
                self.session = Some(session);
                self.round = ticket.0;
                self.load_status = LoadStatus::Ready;
                LoadOutcome::Applied
            }
            Err(e) => {
                warn!("Load #{} failed: {e}", ticket.0);
                self.load_status = LoadStatus::Failed;
                LoadOutcome::Failed(e)
            }
        }
    }

    /// Loads a fresh round from `loader` in one step.
    pub fn start_new_round<L: QuestionLoader + ?Sized>(&mut self, loader: &L) -> LoadOutcome {
        let ticket = self.begin_load();
        let result = loader.load();
        self.finish_load(ticket, result)
    }

    /// First half of a submission: validates input and enters `Submitting`.
    pub fn begin_submission(&mut self, raw: &str) -> std::result::Result<Submission, Rejection> {
        if self.submit_state == SubmitState::Submitting {
            debug!("Submission ignored: another one is in flight");
            return Err(Rejection::Busy);
        }
        if self.load_status == LoadStatus::Loading {
            debug!("Submission ignored: a round is loading");
            return Err(Rejection::Loading);
        }
        if self.session.is_none() {
            return Err(Rejection::NoRound);
        }
        let guess = normalize(raw);
        if guess.is_empty() {
            return Err(Rejection::EmptyInput);
        }
        self.submit_state = SubmitState::Submitting;
        Ok(Submission {
            guess,
            round: self.round,
        })
    }

    /// Second half of a submission: classifies, applies and returns to `Idle`.
    ///
    /// A submission whose round was replaced in the meantime is rejected
    /// without touching the new session.
    pub fn complete_submission(&mut self, submission: Submission) -> Verdict {
        self.submit_state = SubmitState::Idle;
        if submission.round != self.round {
            warn!(
                "Dropping guess for round #{} (current is #{})",
                submission.round, self.round
            );
            return Verdict::Rejected(Rejection::RoundChanged);
        }
        let Some(session) = self.session.as_mut() else {
            return Verdict::Rejected(Rejection::NoRound);
        };
        let verdict = classify_normalized(submission.guess, session);
        info!("Verdict: {verdict:?}");
        verdict
    }

    /// Classifies and applies one raw submission.
    pub fn submit(&mut self, raw: &str) -> Verdict {
        match self.begin_submission(raw) {
            Ok(submission) => self.complete_submission(submission),
            Err(rejection) => Verdict::Rejected(rejection),
        }
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn submit_state(&self) -> SubmitState {
        self.submit_state
    }

    #[must_use]
    pub fn load_status(&self) -> LoadStatus {
        self.load_status
    }

    /// Submissions are possible whenever a session exists and no load is
    /// pending.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.session.is_some()
            && self.load_status != LoadStatus::Loading
            && self.submit_state == SubmitState::Idle
    }

    #[must_use]
    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot::project(self.session.as_ref(), self.load_status, self.can_submit())
    }
}

/// Front-end seam for the game loop.
pub trait GameInterface {
    fn display_loading(&mut self);
    fn display_round(&mut self, snapshot: &RoundSnapshot);
    fn display_load_failure(&mut self, error: &GameError, snapshot: &RoundSnapshot);
    fn display_verdict(&mut self, verdict: &Verdict, snapshot: &RoundSnapshot);
    /// Returns `None` when there is nothing for the loop to do yet.
    fn read_action(&mut self) -> Option<UserAction>;
    fn display_exit_message(&mut self);
}

impl<T: GameInterface + ?Sized> GameInterface for &mut T {
    fn display_loading(&mut self) {
        (**self).display_loading();
    }

    fn display_round(&mut self, snapshot: &RoundSnapshot) {
        (**self).display_round(snapshot);
    }

    fn display_load_failure(&mut self, error: &GameError, snapshot: &RoundSnapshot) {
        (**self).display_load_failure(error, snapshot);
    }

    fn display_verdict(&mut self, verdict: &Verdict, snapshot: &RoundSnapshot) {
        (**self).display_verdict(verdict, snapshot);
    }

    fn read_action(&mut self) -> Option<UserAction> {
        (**self).read_action()
    }

    fn display_exit_message(&mut self) {
        (**self).display_exit_message();
    }
}

/// Runs rounds until the player exits. Returns the final game state.
pub fn game_loop<L, I>(loader: &L, mut interface: I) -> Game
where
    L: QuestionLoader + ?Sized,
    I: GameInterface,
{
    let mut game = Game::new();
    start_round(&mut game, loader, &mut interface);

    loop {
        let Some(action) = interface.read_action() else {
            continue;
        };

        match action {
            UserAction::Exit => {
                interface.display_exit_message();
                break;
            }
            UserAction::NewRound => start_round(&mut game, loader, &mut interface),
            UserAction::Submit(text) => {
                let verdict = game.submit(&text);
                interface.display_verdict(&verdict, &game.snapshot());
            }
        }
    }

    game
}

fn start_round<L, I>(game: &mut Game, loader: &L, interface: &mut I)
where
    L: QuestionLoader + ?Sized,
    I: GameInterface,
{
    interface.display_loading();
    match game.start_new_round(loader) {
        LoadOutcome::Applied => interface.display_round(&game.snapshot()),
        LoadOutcome::Failed(e) => interface.display_load_failure(&e, &game.snapshot()),
        LoadOutcome::Stale => {}
    }
}

use eta_engine::{ProgressEstimate, TaskSnapshot};

use crate::view_model::AppViewModel;

/// Identifies one submission. Ticks carrying an older id are stale.
pub type SessionId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Active,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    session: SessionState,
    session_id: SessionId,
    snapshot: Option<TaskSnapshot>,
    latest: Option<ProgressEstimate>,
    last_error: Option<String>,
    ticker_live: bool,
    ticks: u64,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> SessionState {
        self.session
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    /// Estimates recorded in the current session.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn ticker_live(&self) -> bool {
        self.ticker_live
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            session: self.session,
            snapshot: self.snapshot.clone(),
            estimate: self.latest,
            completed: self.session == SessionState::Completed,
            error: self.last_error.clone(),
            ticks: self.ticks,
        }
    }

    /// Returns whether anything changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn snapshot(&self) -> Option<&TaskSnapshot> {
        self.snapshot.as_ref()
    }

    /// Drops everything from the previous session and hands out a fresh id.
    pub(crate) fn begin_session(&mut self) -> SessionId {
        self.session_id += 1;
        self.session = SessionState::Idle;
        self.snapshot = None;
        self.latest = None;
        self.last_error = None;
        self.ticks = 0;
        self.dirty = true;
        self.session_id
    }

    pub(crate) fn activate(&mut self, snapshot: TaskSnapshot) {
        self.snapshot = Some(snapshot);
        self.session = SessionState::Active;
        self.dirty = true;
    }

    pub(crate) fn record_estimate(&mut self, estimate: ProgressEstimate) {
        self.latest = Some(estimate);
        self.ticks += 1;
        self.dirty = true;
    }

    pub(crate) fn complete(&mut self) {
        self.session = SessionState::Completed;
        self.dirty = true;
    }

    pub(crate) fn fail(&mut self, message: String) {
        self.stop();
        self.last_error = Some(message);
    }

    pub(crate) fn stop(&mut self) {
        self.session = SessionState::Idle;
        self.snapshot = None;
        self.latest = None;
        self.dirty = true;
    }

    pub(crate) fn mark_ticker_live(&mut self) {
        self.ticker_live = true;
    }

    /// Clears the live-ticker flag, returning whether one needs cancelling.
    pub(crate) fn release_ticker(&mut self) -> bool {
        std::mem::take(&mut self.ticker_live)
    }
}

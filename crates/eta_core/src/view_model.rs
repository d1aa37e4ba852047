use eta_engine::{ProgressEstimate, TaskSnapshot};

use crate::SessionState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    pub session: SessionState,
    pub snapshot: Option<TaskSnapshot>,
    /// Latest evaluation; `None` until the first tick of a session.
    pub estimate: Option<ProgressEstimate>,
    /// Render the completion marker after the estimate.
    pub completed: bool,
    /// User-facing message of the error that ended the last session.
    pub error: Option<String>,
    pub ticks: u64,
}

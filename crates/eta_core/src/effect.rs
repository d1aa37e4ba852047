#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Begin firing `Msg::Tick` for `session` at the configured interval.
    StartTicker { session: crate::SessionId },
    /// Release the live ticker. Only emitted while one is live.
    CancelTicker,
    /// Operator-facing detail that must not reach the user.
    ReportDiagnostic { detail: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User submitted a raw status document.
    InputSubmitted { raw: String, now_millis: i64 },
    /// Ticker fired for a session.
    Tick {
        session: crate::SessionId,
        now_millis: i64,
    },
    /// Host is shutting down.
    Teardown,
    /// The presentation sink can no longer be written to.
    OutputLost { reason: String },
}

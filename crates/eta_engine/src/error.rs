use std::fmt::Display;

/// Every way a session can stop short of a completed estimate.
///
/// `Display` yields the exact text shown to the user. Decoder diagnostics for
/// malformed input are kept in `detail` and only ever reach the log.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EtaError {
    #[error("Invalid JSON input. Please check your format.")]
    MalformedInput { detail: String },
    #[error("Task is already completed.")]
    AlreadyCompleted,
    #[error("Insufficient data to calculate remaining time.")]
    InsufficientData,
}

impl EtaError {
    pub(crate) fn malformed(detail: impl Display) -> Self {
        Self::MalformedInput {
            detail: detail.to_string(),
        }
    }

    /// Operator-facing diagnostic, if the variant carries one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::MalformedInput { detail } => Some(detail),
            Self::AlreadyCompleted | Self::InsufficientData => None,
        }
    }
}

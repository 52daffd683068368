/// Result of a single delivery attempt to the form relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success,
    Failure { reason: FailureReason },
}

impl SubmissionOutcome {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Success)
    }
}

/// Why a delivery attempt failed.
///
/// Only used for logs. Every variant maps to the same user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// The request never completed: connection, TLS, timeout, body encoding.
    Transport(String),
    /// The relay answered with a non-2xx status.
    Rejected { status: u16 },
}

impl std::fmt::Display for FailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureReason::Transport(detail) => write!(f, "transport failure: {detail}"),
            FailureReason::Rejected { status } => write!(f, "relay rejected with HTTP {status}"),
        }
    }
}

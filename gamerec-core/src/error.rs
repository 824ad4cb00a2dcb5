use thiserror::Error;

/// Failure of a request against the game backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The backend answered with a non-2xx status.
    #[error("Error: {status}")]
    Remote { status: u16 },
    /// The request never produced a response (DNS, refused, aborted).
    #[error("Network error: {0}")]
    Transport(String),
    /// The response body was not the JSON we expected.
    #[error("JSON parsing error: {0}")]
    Decode(String),
}

impl FetchError {
    /// HTTP status for remote failures.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Remote { status } => Some(*status),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

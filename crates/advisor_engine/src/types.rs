use std::fmt;

use advisor_core::{AnalysisResult, RequestId};

/// Fallback text when the service gave no usable message.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred while analyzing the profile";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    AnalysisCompleted {
        request_id: RequestId,
        result: Result<AnalysisResult, AnalysisError>,
    },
}

/// The engine thread is gone; no further events will arrive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("analysis engine stopped")]
pub struct EngineStopped;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {detail}")]
pub struct AnalysisError {
    pub kind: FailureKind,
    /// The service's own `message`, shown to the user verbatim.
    pub server_message: Option<String>,
    pub detail: String,
}

impl AnalysisError {
    pub(crate) fn new(kind: FailureKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            server_message: None,
            detail: detail.into(),
        }
    }

    pub(crate) fn with_server_message(mut self, message: Option<String>) -> Self {
        self.server_message = message;
        self
    }

    /// Text for the error banner. Every failure kind ends up here.
    pub fn user_message(&self) -> String {
        self.server_message
            .clone()
            .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidEndpoint,
    ReadDocument { path: String },
    BuildRequest,
    HttpStatus(u16),
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    InvalidResponse,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidEndpoint => write!(f, "invalid endpoint"),
            FailureKind::ReadDocument { path } => write!(f, "could not read {path}"),
            FailureKind::BuildRequest => write!(f, "could not build request"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::InvalidResponse => write!(f, "invalid response body"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

// ABOUTME: Errors surfaced by listing calls.
// ABOUTME: Any of these aborts the report being built.

/// A failed listing call.
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("access denied: {0}")]
    AccessDenied(String),

    #[error("request throttled: {0}")]
    Throttled(String),

    #[error("transport error: {0}")]
    Transport(String),
}

/// Error kind for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteErrorKind {
    NotFound,
    AccessDenied,
    Throttled,
    Transport,
}

impl RemoteError {
    /// Returns the error kind for programmatic handling.
    pub fn kind(&self) -> RemoteErrorKind {
        match self {
            RemoteError::NotFound(_) => RemoteErrorKind::NotFound,
            RemoteError::AccessDenied(_) => RemoteErrorKind::AccessDenied,
            RemoteError::Throttled(_) => RemoteErrorKind::Throttled,
            RemoteError::Transport(_) => RemoteErrorKind::Transport,
        }
    }
}

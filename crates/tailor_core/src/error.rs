use thiserror::Error;

/// Failure reading the system clipboard. Never mutates queue or profile state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard access denied")]
    PermissionDenied,
    #[error("clipboard does not contain text")]
    NotText,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown job status `{0}` (expected pending, processing, completed or failed)")]
pub struct ParseStatusError(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown profile field `{0}`")]
pub struct ParseFieldError(pub String);

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NavError {
    #[error("no profile was passed to the drawing screen")]
    MissingProfile,
    #[error("unknown profile id {0}")]
    UnknownProfile(u32),
    #[error("invalid navigation state: {0}")]
    InvalidState(#[from] serde_json::Error),
}

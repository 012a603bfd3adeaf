use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("[Session] Failed to access session file: {0}")]
    Io(#[from] std::io::Error),
    #[error("[Session] Failed to serialize session: {0}")]
    Serialize(#[from] serde_json::Error),
}

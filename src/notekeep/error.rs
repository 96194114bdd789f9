use thiserror::Error;

#[derive(Error, Debug)]
pub enum NoteError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("A note with this title and content already exists")]
    Duplicate,

    #[error("Note not found: {0}")]
    NotFound(String),

    #[error("Stored notes are corrupt: {0}")]
    CorruptStorage(#[source] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Notes are still loading")]
    NotReady,

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl NoteError {
    /// Failures of the durable layer, which a caller may retry or recover
    /// from (e.g. by resetting the store). Input errors are not retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            NoteError::Io(_) | NoteError::Store(_) | NoteError::CorruptStorage(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, NoteError>;

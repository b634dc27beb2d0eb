use thiserror::Error;

/// Ошибки привязки и переключения табов
#[derive(Debug, Error)]
pub enum TabSelectionError {
    #[error("container `#{id}` not found in document")]
    MissingContainer { id: String },

    #[error("tab input #{index} has no associated label")]
    MissingLabel { index: usize },

    #[error("label of tab input #{index} has no parent element")]
    MissingTabNode { index: usize },

    #[error("click target is not a tracked tab input")]
    UntrackedInput,

    #[error("tab index {index} out of range (tracking {len} inputs)")]
    UnknownTab { index: usize, len: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("configuration parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("DOM error: {0}")]
    Dom(String),
}

pub type Result<T> = std::result::Result<T, TabSelectionError>;

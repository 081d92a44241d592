use thiserror::Error;

/// Errors from the code around the translator. Translation itself never fails.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read override file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid override file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown key `{0}`")]
    UnknownKey(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

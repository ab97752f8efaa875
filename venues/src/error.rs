use thiserror::Error;

#[derive(Error, Debug)]
pub enum VenueError {
    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("invalid pair: {0}")]
    InvalidPair(String),

    #[error("pair not found: {0}")]
    PairNotFound(String),

    #[error("missing credentials for signed request")]
    MissingCredentials,

    #[error("validation error: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, VenueError>;

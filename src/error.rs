use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("venue error: {0}")]
    Venue(#[from] venues::VenueError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BotError>;

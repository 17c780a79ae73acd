use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid phase '{name}': start {start} and end {end} must be finite with 0 <= start <= end")]
    InvalidPhase { name: String, start: f64, end: f64 },

    #[error("Invalid smoothing factor {0}: must lie strictly between 0 and 1")]
    InvalidSmoothing(f64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

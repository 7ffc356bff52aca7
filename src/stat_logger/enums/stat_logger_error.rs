use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatLoggerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot convert to JSON: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid counter content: {0:?}")]
    InvalidCounter(String),

    #[error("Counter overflow")]
    CounterOverflow,
}

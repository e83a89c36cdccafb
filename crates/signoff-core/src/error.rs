use thiserror::Error;

#[derive(Debug, Error)]
pub enum SignoffError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("upstream error: {0}")]
    Upstream(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

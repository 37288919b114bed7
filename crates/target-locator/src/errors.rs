use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum LocatorError {
    /// No strategy produced an eligible element. This is a typed result the
    /// caller branches on, not flow control by exception.
    #[error("target not found: {0}")]
    NotFound(String),

    #[error("invalid target description: {0}")]
    InvalidDescription(String),

    #[error("document query failed: {0}")]
    Dom(String),
}

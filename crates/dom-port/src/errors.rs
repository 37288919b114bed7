use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum DomError {
    /// The node disappeared between enumeration and the write.
    #[error("stale node: {0}")]
    StaleNode(u64),

    #[error("node {0} does not accept text input")]
    NotTypeable(u64),

    #[error("document I/O failure: {0}")]
    Io(String),
}

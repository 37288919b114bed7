use thiserror::Error;

#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("surface not permitted: {0}")]
    SurfaceDenied(String),

    #[error("navigation not permitted: {0}")]
    NavigationDenied(String),

    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("policy I/O failure: {0}")]
    Io(String),

    #[error("invalid policy file: {0}")]
    Invalid(String),
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlowError {
    /// Exactly one run may be live per engine; `start` while one is active
    /// is rejected, never queued.
    #[error("a run is already active")]
    Busy,

    #[error("surface not permitted for automation: {0}")]
    SurfaceDenied(String),

    #[error("step sequence is empty")]
    EmptySequence,

    #[error("document error: {0}")]
    Dom(String),
}

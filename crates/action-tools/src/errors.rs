use thiserror::Error;

use dom_port::DomError;
use pagepilot_policy_center::PolicyError;
use target_locator::LocatorError;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("target not found: {0}")]
    TargetNotFound(String),

    #[error(transparent)]
    Policy(#[from] PolicyError),

    #[error("document error: {0}")]
    Dom(#[from] DomError),

    #[error("operation cancelled")]
    Cancelled,

    #[error("invalid step: {0}")]
    InvalidStep(String),
}

impl From<LocatorError> for ToolError {
    fn from(err: LocatorError) -> Self {
        match err {
            LocatorError::NotFound(description) => ToolError::TargetNotFound(description),
            LocatorError::InvalidDescription(reason) => ToolError::InvalidStep(reason),
            LocatorError::Dom(reason) => ToolError::Dom(DomError::Io(reason)),
        }
    }
}

impl ToolError {
    /// Cancellation is a control-flow outcome, not a step fault; the
    /// controller treats it separately from every other variant.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ToolError::Cancelled)
    }
}

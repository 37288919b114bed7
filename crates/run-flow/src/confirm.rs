//! Human confirmation gate for sensitive steps.
//!
//! The controller asks the port before executing any step the policy flags
//! as sensitive. A refusal fails that step and the run moves on; it is not
//! a run-level error.

use async_trait::async_trait;
use pagepilot_core_types::Step;

use crate::types::RunSnapshot;

/// Port through which the engine requests a human go-ahead. Implementations
/// may block for as long as the user takes; the controller races the request
/// against run cancellation.
#[async_trait]
pub trait ConfirmPort: Send + Sync {
    /// Return `true` to let the step run, `false` to skip it as failed.
    async fn confirm(&self, step: &Step, run: &RunSnapshot) -> bool;
}

/// Approves everything. For tests and headless batch runs on trusted pages.
pub struct AutoApprove;

#[async_trait]
impl ConfirmPort for AutoApprove {
    async fn confirm(&self, _step: &Step, _run: &RunSnapshot) -> bool {
        true
    }
}

/// Refuses everything. The safe default when no confirmation surface is
/// wired in: a sensitive step without a human behind it does not run.
pub struct DenyAll;

#[async_trait]
impl ConfirmPort for DenyAll {
    async fn confirm(&self, _step: &Step, _run: &RunSnapshot) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Run;

    #[tokio::test]
    async fn auto_approve_and_deny_all_are_constant() {
        let run = Run::new(vec![Step::click("pay now")]);
        let snapshot = run.snapshot();
        assert!(AutoApprove.confirm(&run.steps[0], &snapshot).await);
        assert!(!DenyAll.confirm(&run.steps[0], &snapshot).await);
    }
}

use std::io::{self, BufRead, Write};

use async_trait::async_trait;
use pagepilot_core_types::Step;
use run_flow::{ConfirmPort, RunSnapshot};
use tracing::warn;

/// Interactive confirmation gate: asks on the terminal and reads one line.
/// Anything other than an explicit yes refuses the step.
pub struct PromptConfirm;

#[async_trait]
impl ConfirmPort for PromptConfirm {
    async fn confirm(&self, step: &Step, _run: &RunSnapshot) -> bool {
        let label = step.label();
        let answer = tokio::task::spawn_blocking(move || {
            let mut stderr = io::stderr();
            let _ = write!(stderr, "Sensitive step \"{label}\". Run it? [y/N] ");
            let _ = stderr.flush();

            let mut line = String::new();
            if io::stdin().lock().read_line(&mut line).is_err() {
                return false;
            }
            matches!(line.trim().to_lowercase().as_str(), "y" | "yes")
        })
        .await;

        match answer {
            Ok(approved) => approved,
            Err(err) => {
                warn!("confirmation prompt failed: {}", err);
                false
            }
        }
    }
}

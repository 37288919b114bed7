use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::errors::ToolError;
use crate::tempo;

/// Suspend for exactly the requested duration and do nothing else. The
/// suspension observes the cancellation token so a long wait can be cut
/// short by `stop()`.
pub async fn execute(cancel: &CancellationToken, amount_ms: u64) -> Result<(), ToolError> {
    debug!(amount_ms, "waiting");
    tempo::settle(cancel, Duration::from_millis(amount_ms)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;
    use tokio::time::sleep;

    #[tokio::test(flavor = "multi_thread")]
    async fn stop_cuts_a_long_wait_short() {
        let cancel = CancellationToken::new();
        let handle = cancel.clone();
        tokio::spawn(async move {
            sleep(Duration::from_millis(50)).await;
            handle.cancel();
        });

        let started = Instant::now();
        let result = execute(&cancel, 10_000).await;
        assert!(matches!(result, Err(ToolError::Cancelled)));
        assert!(started.elapsed() < Duration::from_secs(2));
    }

    #[tokio::test]
    async fn quiet_token_waits_out_the_duration() {
        let cancel = CancellationToken::new();
        let started = Instant::now();
        execute(&cancel, 30).await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(30));
    }
}

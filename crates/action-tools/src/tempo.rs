//! Pacing helpers shared by the runners.
//!
//! Settle delays keep each effect observable to a supervising human;
//! keystroke jitter keeps typing inside human input timing. Every sleep
//! races the run-scoped cancellation token so `stop()` cuts pacing short.

use std::ops::RangeInclusive;
use std::time::Duration;

use rand::Rng;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;

use crate::errors::ToolError;

/// Delay before dispatching an activation, after scrolling into view.
pub const PRE_ACTION_SETTLE: Duration = Duration::from_millis(250);

/// Delay after an effect, so the page (and any capture) can catch up.
pub const POST_ACTION_SETTLE: Duration = Duration::from_millis(400);

/// Inter-character typing delay bounds, milliseconds.
pub const KEYSTROKE_DELAY_MS: RangeInclusive<u64> = 40..=120;

/// Cancellation-aware sleep. Returns `Err(Cancelled)` the moment the token
/// fires, without waiting out the remainder.
pub async fn settle(cancel: &CancellationToken, duration: Duration) -> Result<(), ToolError> {
    tokio::select! {
        _ = cancel.cancelled() => Err(ToolError::Cancelled),
        _ = sleep(duration) => Ok(()),
    }
}

/// Randomized delay between committed characters.
pub fn keystroke_delay() -> Duration {
    Duration::from_millis(rand::thread_rng().gen_range(KEYSTROKE_DELAY_MS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn settle_completes_when_token_is_quiet() {
        let cancel = CancellationToken::new();
        assert!(settle(&cancel, Duration::from_millis(10)).await.is_ok());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn settle_aborts_promptly_on_cancel() {
        let cancel = CancellationToken::new();
        let handle = cancel.clone();
        tokio::spawn(async move {
            sleep(Duration::from_millis(20)).await;
            handle.cancel();
        });

        let started = Instant::now();
        let result = settle(&cancel, Duration::from_secs(10)).await;
        assert!(matches!(result, Err(ToolError::Cancelled)));
        assert!(started.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn keystroke_delay_stays_in_bounds() {
        for _ in 0..64 {
            let delay = keystroke_delay().as_millis() as u64;
            assert!(KEYSTROKE_DELAY_MS.contains(&delay));
        }
    }
}

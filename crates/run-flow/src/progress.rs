//! Push channel from the controller to any observer.
//!
//! Observers only ever receive immutable snapshots, never the live run; a
//! slow observer can lag and drop intermediate snapshots but never sees a
//! torn read.

use tokio::sync::broadcast;
use tracing::trace;

use crate::types::RunSnapshot;

pub struct ProgressBus {
    sender: broadcast::Sender<RunSnapshot>,
}

impl ProgressBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<RunSnapshot> {
        self.sender.subscribe()
    }

    /// Publishing with no subscribers is not an error.
    pub fn publish(&self, snapshot: RunSnapshot) {
        trace!(status = ?snapshot.status, index = snapshot.current_index, "progress");
        let _ = self.sender.send(snapshot);
    }
}

impl Default for ProgressBus {
    fn default() -> Self {
        Self::new(64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Run;
    use pagepilot_core_types::Step;

    #[tokio::test]
    async fn subscribers_receive_published_snapshots() {
        let bus = ProgressBus::new(8);
        let mut rx = bus.subscribe();

        let run = Run::new(vec![Step::wait(5)]);
        bus.publish(run.snapshot());

        let received = rx.recv().await.unwrap();
        assert_eq!(received.total_steps, 1);
    }

    #[test]
    fn publish_without_subscribers_is_a_no_op() {
        let bus = ProgressBus::new(8);
        bus.publish(Run::idle().snapshot());
    }
}

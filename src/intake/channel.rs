//! Channel-backed intake sink

use super::{IntakeRecord, IntakeSink};
use tokio::sync::mpsc;

/// Forwards records to an [`Onboarder`](super::Onboarder) without waiting for it
#[derive(Debug, Clone)]
pub struct ChannelIntakeSink {
    tx: mpsc::UnboundedSender<IntakeRecord>,
}

impl ChannelIntakeSink {
    pub fn new(tx: mpsc::UnboundedSender<IntakeRecord>) -> Self {
        Self { tx }
    }

    /// Create a sink together with the receiving end
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<IntakeRecord>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }
}

impl IntakeSink for ChannelIntakeSink {
    fn onboard(&mut self, record: IntakeRecord) {
        if self.tx.send(record).is_err() {
            tracing::warn!("onboarding record dropped: intake receiver is closed");
        }
    }
}

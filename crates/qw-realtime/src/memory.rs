//! In-Process Publisher
//!
//! Broadcast-based publisher used in development and tests when provider
//! credentials are absent. Subscribers receive the same envelopes the HTTP
//! publisher would send, so the client-side merge path can be exercised
//! without the external service.

use async_trait::async_trait;
use tokio::sync::broadcast;
use tracing::debug;

use crate::{RealtimePublisher, Result};
use qw_common::RealtimeMessage;

const CHANNEL_CAPACITY: usize = 256;

/// Publisher that fans envelopes out over a local broadcast channel
pub struct InMemoryPublisher {
    sender: broadcast::Sender<RealtimeMessage>,
}

impl InMemoryPublisher {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { sender }
    }

    /// Subscribe to all published envelopes
    pub fn subscribe(&self) -> broadcast::Receiver<RealtimeMessage> {
        self.sender.subscribe()
    }

    /// Number of live subscribers
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for InMemoryPublisher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RealtimePublisher for InMemoryPublisher {
    async fn publish(
        &self,
        channel: &str,
        event: &str,
        payload: serde_json::Value,
    ) -> Result<()> {
        let message = RealtimeMessage::new(channel, event, payload);
        // A send error only means nobody is subscribed; publishing into the
        // void is fine for the in-process bus.
        if self.sender.send(message).is_err() {
            debug!(channel, event, "No realtime subscribers");
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "in-memory"
    }
}

//! QueueWise Realtime
//!
//! Client for the third-party pub/sub messaging provider:
//! - [`RealtimePublisher`] trait with an HTTP provider implementation and an
//!   in-process broadcast implementation for development and tests
//! - private-channel subscription signatures for browser clients
//! - [`QueueView`] projection that merges incoming deltas into local view state

use async_trait::async_trait;
use qw_common::RealtimeMessage;

pub mod auth;
pub mod error;
pub mod http;
pub mod memory;
pub mod projection;

pub use auth::subscription_signature;
pub use error::RealtimeError;
pub use http::HttpPublisher;
pub use memory::InMemoryPublisher;
pub use projection::QueueView;

pub type Result<T> = std::result::Result<T, RealtimeError>;

/// Trait for publishing messages to named channels
#[async_trait]
pub trait RealtimePublisher: Send + Sync {
    /// Publish an event payload to a channel
    async fn publish(&self, channel: &str, event: &str, payload: serde_json::Value)
        -> Result<()>;

    /// Publish a pre-built envelope
    async fn publish_message(&self, message: RealtimeMessage) -> Result<()> {
        let RealtimeMessage {
            channel,
            event,
            payload,
            ..
        } = message;
        self.publish(&channel, &event, payload).await
    }

    /// Provider name for logging
    fn name(&self) -> &str;
}

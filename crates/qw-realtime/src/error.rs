//! Realtime error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RealtimeError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Provider rejected publish: status {status}: {body}")]
    Provider { status: u16, body: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Provider credentials not configured")]
    NotConfigured,

    #[error("Channel closed: {0}")]
    ChannelClosed(String),
}

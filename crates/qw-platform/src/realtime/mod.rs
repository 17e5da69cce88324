//! Realtime aggregate: private-channel subscription credentials

pub mod api;

pub use api::{realtime_router, RealtimeApiState};

//! Service center aggregate: mock locations with live queue state

pub mod api;
pub mod entity;
pub mod store;

pub use api::{centers_router, stats_router, CentersState};
pub use entity::{QueueStats, ServiceCenter};
pub use store::CenterStore;

//! Insight aggregate: mock predictions and anomaly records

pub mod api;
pub mod entity;
pub mod store;

pub use api::{insights_router, InsightsState};
pub use entity::{Anomaly, AnomalySeverity, WaitPrediction};
pub use store::InsightStore;

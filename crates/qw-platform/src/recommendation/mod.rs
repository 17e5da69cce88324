//! Recommendation aggregate: fixed-heuristic visit suggestions

pub mod api;
pub mod service;

pub use api::{recommendations_router, RecommendationsState};
pub use service::{recommend, Recommendation, RecommendationKind};

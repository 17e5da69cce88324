//! Simulation aggregate: the mock data perturbation tick

pub mod api;
pub mod service;

pub use api::{simulation_router, SimulationState};
pub use service::{SimulationReport, SimulationService};

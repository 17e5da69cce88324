//! QueueWise Platform
//!
//! Core platform providing:
//! - Mock user accounts with signup/login/profile flows
//! - Service centers with jittered wait times and queue lengths
//! - Appointments and on-demand time slot generation
//! - Wait predictions, queue stats, and anomaly records
//! - Heuristic visit recommendations
//! - The simulation tick that perturbs mock data and republishes it
//!
//! ## Module Organization (Aggregate-based)
//!
//! Each aggregate contains:
//! - `entity` - Domain entities
//! - `store` - In-memory data access (substituting for a database)
//! - `api` - REST endpoints

// Core aggregates
pub mod appointment;
pub mod center;
pub mod insight;
pub mod timeslot;
pub mod user;

// Derived behavior
pub mod recommendation;
pub mod simulation;

// Authentication & realtime credentials
pub mod auth;
pub mod realtime;

// Shared infrastructure
pub mod shared;

// Dev data
pub mod seed;

// Re-export common types from shared
pub use shared::error::{PlatformError, Result};

// Re-export main entity types for convenience
pub use appointment::entity::{Appointment, AppointmentStatus};
pub use center::entity::{QueueStats, ServiceCenter};
pub use insight::entity::{Anomaly, AnomalySeverity, WaitPrediction};
pub use user::entity::{PlanTier, PreferredWindow, User, UserPreferences, UserRole, VisitRecord};

//! User aggregate: mock accounts, preferences, and visit history

pub mod api;
pub mod entity;
pub mod store;

pub use api::{users_router, UsersState};
pub use entity::{PlanTier, PreferredWindow, User, UserPreferences, UserRole, VisitRecord};
pub use store::UserStore;

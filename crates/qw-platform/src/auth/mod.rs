//! Session authentication: opaque tokens, cookies, login/logout endpoints

pub mod api;
pub mod session;

pub use api::{auth_router, AuthState};
pub use session::{Session, SessionService};

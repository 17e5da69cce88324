//! Shared infrastructure: errors, API types, middleware

pub mod api_common;
pub mod error;
pub mod middleware;

//! Application services for the HTTP layer.

pub mod admin_bootstrap;
pub mod auth;
pub mod uploads;

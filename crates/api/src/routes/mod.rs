//! Route handler modules.

pub mod admin;
pub mod auth;
pub mod bookings;
pub mod events;
pub mod health;
pub mod tickets;

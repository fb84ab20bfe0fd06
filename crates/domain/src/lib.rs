//! Domain layer for the Evento backend.
//!
//! This crate contains:
//! - Domain models (User, Admin, Event, Ticket, Booking)
//! - The booking engine (validation, totals, QR payload assembly)
//! - Domain error types

pub mod models;
pub mod services;

//! Domain services for Evento.

pub mod booking;

//! HTTP API for the Evento ticketing backend.
//!
//! Exposed as a library so integration tests can build the router
//! without starting a server.

pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod services;

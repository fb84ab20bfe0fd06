//! Persistence layer for the Evento backend.
//!
//! This crate contains:
//! - Database connection management
//! - Entity definitions (database row mappings)
//! - Repository implementations, one per collection

pub mod db;
pub mod entities;
pub mod metrics;
pub mod repositories;

//! Shared utilities for the Evento backend.
//!
//! This crate provides functionality used across all other crates:
//! - Password hashing with Argon2id
//! - JWT issuance and verification for User/Admin principals
//! - Booking form validation helpers
//! - QR code generation for ticket confirmations

pub mod jwt;
pub mod password;
pub mod qr;
pub mod validation;

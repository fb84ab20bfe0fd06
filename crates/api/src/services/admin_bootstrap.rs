//! Admin bootstrap service for initial setup.
//!
//! Creates the first admin account on startup if configured. This is a
//! one-time operation that checks whether the account already exists.

use sqlx::PgPool;
use tracing::{info, warn};

use persistence::repositories::AdminRepository;
use shared::password::{hash_password, PasswordError};

use crate::config::AdminBootstrapConfig;

/// Error types for admin bootstrap.
#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Password hashing error: {0}")]
    PasswordHash(#[from] PasswordError),
}

/// Bootstrap the admin account if configured and not already done.
///
/// Called after migrations on startup. Idempotent - if the configured
/// email already has an admin account, nothing happens.
pub async fn bootstrap_admin(
    pool: &PgPool,
    config: &AdminBootstrapConfig,
) -> Result<(), BootstrapError> {
    // Skip if not configured
    if config.bootstrap_email.is_empty() {
        return Ok(());
    }

    if config.bootstrap_password.is_empty() {
        warn!(
            "EVENTO__ADMIN__BOOTSTRAP_EMAIL is set but EVENTO__ADMIN__BOOTSTRAP_PASSWORD is empty - skipping bootstrap"
        );
        return Ok(());
    }

    let admins = AdminRepository::new(pool.clone());

    if admins.find_by_email(&config.bootstrap_email).await?.is_some() {
        info!("Bootstrap admin already exists - skipping bootstrap");
        return Ok(());
    }

    let password_hash = hash_password(&config.bootstrap_password)?;
    let name = if config.bootstrap_name.is_empty() {
        "Administrator"
    } else {
        config.bootstrap_name.as_str()
    };
    let admin = admins
        .create(name, &config.bootstrap_email, &password_hash)
        .await?;

    info!(
        email = %config.bootstrap_email,
        admin_id = %admin.id,
        "Bootstrap admin account created successfully"
    );

    warn!(
        "SECURITY: Remove EVENTO__ADMIN__BOOTSTRAP_EMAIL and EVENTO__ADMIN__BOOTSTRAP_PASSWORD \
         from configuration after initial setup"
    );

    Ok(())
}

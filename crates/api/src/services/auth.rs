//! Authentication service for User and Admin principals.
//!
//! Users and Admins are separate collections with separate unique-email
//! constraints; registration and login are symmetric across the two kinds
//! but issue tokens carrying the respective role.

use sqlx::PgPool;
use thiserror::Error;

use domain::models::{Admin, User};
use persistence::repositories::{AdminRepository, UserRepository};
use shared::jwt::{Claims, JwtConfig, JwtError, PrincipalRole};
use shared::password::{hash_password, verify_password, PasswordError};

use crate::config::AuthConfig;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Email already registered")]
    EmailAlreadyExists,

    #[error("Account not found")]
    PrincipalNotFound,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token error: {0}")]
    Token(#[from] JwtError),

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Authentication service. Constructed per request from the pool and the
/// configured signing secret; holds no shared session state.
pub struct AuthService {
    users: UserRepository,
    admins: AdminRepository,
    jwt: JwtConfig,
}

impl AuthService {
    /// Creates a new AuthService from the pool and auth configuration.
    pub fn new(pool: PgPool, auth: &AuthConfig) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            admins: AdminRepository::new(pool),
            jwt: JwtConfig::new(&auth.token_secret, auth.token_expiry_secs),
        }
    }

    /// Register a user account. The plaintext password is hashed with
    /// Argon2id and discarded.
    pub async fn register_user(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, AuthError> {
        if self.users.find_by_email(email).await?.is_some() {
            return Err(AuthError::EmailAlreadyExists);
        }
        let password_hash = hash_password(password)?;
        let entity = self.users.create(name, email, &password_hash).await?;
        Ok(entity.into())
    }

    /// Log a user in, returning the account and a signed token.
    pub async fn login_user(&self, email: &str, password: &str) -> Result<(User, String), AuthError> {
        let entity = self
            .users
            .find_by_email(email)
            .await?
            .ok_or(AuthError::PrincipalNotFound)?;

        if !verify_password(password, &entity.password_hash)? {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self
            .jwt
            .generate_token(entity.id, &entity.email, PrincipalRole::User)?;
        Ok((entity.into(), token))
    }

    /// Register an admin account.
    pub async fn register_admin(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Admin, AuthError> {
        if self.admins.find_by_email(email).await?.is_some() {
            return Err(AuthError::EmailAlreadyExists);
        }
        let password_hash = hash_password(password)?;
        let entity = self.admins.create(name, email, &password_hash).await?;
        Ok(entity.into())
    }

    /// Log an admin in, returning the account and a signed token carrying
    /// the admin role.
    pub async fn login_admin(
        &self,
        email: &str,
        password: &str,
    ) -> Result<(Admin, String), AuthError> {
        let entity = self
            .admins
            .find_by_email(email)
            .await?
            .ok_or(AuthError::PrincipalNotFound)?;

        if !verify_password(password, &entity.password_hash)? {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self
            .jwt
            .generate_token(entity.id, &entity.email, PrincipalRole::Admin)?;
        Ok((entity.into(), token))
    }

    /// Verify a token and return its claims.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        Ok(self.jwt.verify_token(token)?)
    }

    /// Look up a user by the id carried in validated claims.
    pub async fn user_for_claims(&self, claims: &Claims) -> Result<User, AuthError> {
        let id = shared::jwt::principal_id(claims)?;
        let entity = self
            .users
            .find_by_id(id)
            .await?
            .ok_or(AuthError::PrincipalNotFound)?;
        Ok(entity.into())
    }
}

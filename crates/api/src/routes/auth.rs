//! User registration, login, and session handlers.
//!
//! User sessions ride a `token` cookie; the admin flow in `routes::admin`
//! returns its token in the response body instead. The asymmetry is kept
//! on purpose so both frontends keep working unchanged.

use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use validator::Validate;

use domain::models::User;

use crate::app::AppState;
use crate::error::ApiError;
use crate::services::auth::AuthService;

/// Cookie carrying the user session token.
pub const TOKEN_COOKIE: &str = "token";

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((TOKEN_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// POST /register
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    request.validate()?;

    let auth = AuthService::new(state.pool.clone(), &state.config.auth);
    let user = auth
        .register_user(&request.name, &request.email, &request.password)
        .await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// POST /login
///
/// On success the token is set as an HTTP-only cookie and the account is
/// returned in the body.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<LoginRequest>,
) -> Result<(CookieJar, Json<User>), ApiError> {
    request.validate()?;

    let auth = AuthService::new(state.pool.clone(), &state.config.auth);
    let (user, token) = auth.login_user(&request.email, &request.password).await?;

    Ok((jar.add(session_cookie(token)), Json(user)))
}

/// POST /logout
///
/// Clears the session cookie. Succeeds whether or not a session existed.
pub async fn logout(jar: CookieJar) -> (CookieJar, Json<MessageResponse>) {
    let jar = jar.remove(Cookie::build((TOKEN_COOKIE, "")).path("/").build());
    (
        jar,
        Json(MessageResponse {
            message: "Logged out".to_string(),
        }),
    )
}

/// GET /profile
///
/// Returns the account behind the session cookie. No cookie at all means
/// no session and answers 200 with a null body, so the frontend can probe
/// for a login without an error path. A token that is present but
/// expired or malformed is a 401.
pub async fn profile(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<Json<Option<User>>, ApiError> {
    let Some(token) = jar.get(TOKEN_COOKIE).map(|c| c.value().to_string()) else {
        return Ok(Json(None));
    };

    let auth = AuthService::new(state.pool.clone(), &state.config.auth);
    let claims = auth.verify(&token)?;
    let user = auth.user_for_claims(&claims).await?;

    Ok(Json(Some(user)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_request_requires_valid_email() {
        let request = RegisterRequest {
            name: "Sam".into(),
            email: "not-an-email".into(),
            password: "hunter2".into(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn register_request_requires_name() {
        let request = RegisterRequest {
            name: "".into(),
            email: "sam@example.com".into(),
            password: "hunter2".into(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn session_cookie_is_http_only() {
        let cookie = session_cookie("abc".into());
        assert_eq!(cookie.name(), TOKEN_COOKIE);
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.path(), Some("/"));
    }
}

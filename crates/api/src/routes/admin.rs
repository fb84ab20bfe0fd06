//! Admin registration, login, and dashboard handlers.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use validator::Validate;

use domain::models::{Admin, BookingStats};
use persistence::repositories::BookingRepository;

use crate::app::AppState;
use crate::error::ApiError;
use crate::routes::auth::{LoginRequest, RegisterRequest};
use crate::services::auth::AuthService;

/// Admin login response. Unlike the user flow, the token travels in the
/// body and the client stores it itself.
#[derive(Debug, Serialize)]
pub struct AdminLoginResponse {
    pub token: String,
    pub admin: Admin,
}

/// POST /admin/register
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<Admin>), ApiError> {
    request.validate()?;

    let auth = AuthService::new(state.pool.clone(), &state.config.auth);
    let admin = auth
        .register_admin(&request.name, &request.email, &request.password)
        .await?;

    Ok((StatusCode::CREATED, Json(admin)))
}

/// POST /admin/login
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AdminLoginResponse>, ApiError> {
    request.validate()?;

    let auth = AuthService::new(state.pool.clone(), &state.config.auth);
    let (admin, token) = auth.login_admin(&request.email, &request.password).await?;

    Ok(Json(AdminLoginResponse { token, admin }))
}

/// GET /admin/booking-stats
///
/// Aggregate dashboard figures: confirmed-booking count, revenue over
/// completed-and-confirmed bookings, and the 10 newest bookings.
pub async fn booking_stats(
    State(state): State<AppState>,
) -> Result<Json<BookingStats>, ApiError> {
    let bookings = BookingRepository::new(state.pool.clone());
    let stats = bookings.stats().await?;
    Ok(Json(stats))
}

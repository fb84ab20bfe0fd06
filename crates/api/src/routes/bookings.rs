//! Booking handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use domain::models::Booking;
use domain::services::booking::{prepare_booking, BookingRequest};
use persistence::repositories::{BookingRepository, EventRepository};

use crate::app::AppState;
use crate::error::ApiError;

/// POST /bookings
///
/// The event is fetched server-side and its price drives the total; the
/// client's idea of the amount is never consulted. Card details are
/// validated for shape and dropped.
pub async fn create_booking(
    State(state): State<AppState>,
    Json(request): Json<BookingRequest>,
) -> Result<(StatusCode, Json<Booking>), ApiError> {
    let events = EventRepository::new(state.pool.clone());
    let event = events
        .find_by_id(request.event_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Event not found".into()))?;

    let new_booking = prepare_booking(&event.into(), &request)?;

    let bookings = BookingRepository::new(state.pool.clone());
    let created = bookings.create(&new_booking).await?;

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// GET /bookings
///
/// All bookings, newest first. Cancelled bookings are included.
pub async fn list_bookings(State(state): State<AppState>) -> Result<Json<Vec<Booking>>, ApiError> {
    let bookings = BookingRepository::new(state.pool.clone());
    let entities = bookings.list_newest_first().await?;
    Ok(Json(entities.into_iter().map(Into::into).collect()))
}

/// GET /bookings/:id
pub async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Booking>, ApiError> {
    let bookings = BookingRepository::new(state.pool.clone());
    let entity = bookings
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Booking not found".into()))?;
    Ok(Json(entity.into()))
}

/// GET /bookings/event/:event_id
pub async fn list_event_bookings(
    State(state): State<AppState>,
    Path(event_id): Path<Uuid>,
) -> Result<Json<Vec<Booking>>, ApiError> {
    let bookings = BookingRepository::new(state.pool.clone());
    let entities = bookings.list_for_event(event_id).await?;
    Ok(Json(entities.into_iter().map(Into::into).collect()))
}

/// DELETE /bookings/:id
///
/// Soft-cancel: the record stays, with `bookingStatus` flipped to
/// Cancelled. Repeating the call on a cancelled booking succeeds and
/// changes nothing.
pub async fn cancel_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Booking>, ApiError> {
    let bookings = BookingRepository::new(state.pool.clone());
    let entity = bookings
        .cancel(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Booking not found".into()))?;
    Ok(Json(entity.into()))
}

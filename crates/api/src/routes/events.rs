//! Event catalog handlers.

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use uuid::Uuid;

use domain::models::{Event, NewEvent};
use persistence::repositories::EventRepository;

use crate::app::AppState;
use crate::error::ApiError;
use crate::routes::auth::MessageResponse;
use crate::services::uploads::UploadStore;

/// POST /createEvent
///
/// Multipart form from the admin event-creation page. Text fields arrive
/// camelCased; the image arrives under `image` and is optional. The record
/// is stored with whatever the form sent; only the date and price need to
/// parse.
pub async fn create_event(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<Event>), ApiError> {
    let mut title = None;
    let mut description = String::new();
    let mut organized_by = String::new();
    let mut event_date = None;
    let mut event_time = String::new();
    let mut location = String::new();
    let mut ticket_price = 0i64;
    let mut likes = 0i64;
    let mut image = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Validation(format!("Malformed multipart body: {}", e)))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "image" => {
                let original_name = field.file_name().unwrap_or("image").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::Validation(format!("Image upload failed: {}", e)))?;
                if bytes.is_empty() {
                    continue;
                }
                let store = UploadStore::new(&state.config.uploads.dir);
                image = Some(store.store(&original_name, &bytes).await?);
            }
            _ => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| ApiError::Validation(format!("Malformed field: {}", e)))?;
                match name.as_str() {
                    "title" => title = Some(value),
                    "description" => description = value,
                    "organizedBy" => organized_by = value,
                    "eventDate" => {
                        let date = NaiveDate::parse_from_str(&value, "%Y-%m-%d")
                            .map_err(|_| {
                                ApiError::Validation(format!("Invalid event date: {}", value))
                            })?;
                        event_date = Some(date);
                    }
                    "eventTime" => event_time = value,
                    "location" => location = value,
                    "ticketPrice" => {
                        ticket_price = value.parse().map_err(|_| {
                            ApiError::Validation(format!("Invalid ticket price: {}", value))
                        })?;
                    }
                    "likes" => {
                        likes = value.parse().unwrap_or(0);
                    }
                    // Unknown fields are ignored, not rejected.
                    _ => {}
                }
            }
        }
    }

    let title = title.ok_or_else(|| ApiError::Validation("Title is required".into()))?;
    let event_date =
        event_date.ok_or_else(|| ApiError::Validation("Event date is required".into()))?;

    let new_event = NewEvent {
        title,
        description,
        organized_by,
        event_date,
        event_time,
        location,
        ticket_price,
        image,
        likes,
    };

    let events = EventRepository::new(state.pool.clone());
    let created = events.create(&new_event).await?;

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// GET /events (also served at GET /createEvent for the legacy frontend)
pub async fn list_events(State(state): State<AppState>) -> Result<Json<Vec<Event>>, ApiError> {
    let events = EventRepository::new(state.pool.clone());
    let entities = events.list().await?;
    Ok(Json(entities.into_iter().map(Into::into).collect()))
}

/// GET /event/:id
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Event>, ApiError> {
    let events = EventRepository::new(state.pool.clone());
    let entity = events
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Event not found".into()))?;
    Ok(Json(entity.into()))
}

/// DELETE /event/:id
///
/// Idempotent: deleting an id that is already gone still reports success.
/// Bookings referencing the event are left untouched.
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    let events = EventRepository::new(state.pool.clone());
    events.delete(id).await?;
    Ok(Json(MessageResponse {
        message: "Event deleted".to_string(),
    }))
}

/// POST /event/:id
///
/// Adds one like and returns the updated event. Concurrent likes can land
/// on the same base count; the occasional lost increment is accepted.
pub async fn like_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Event>, ApiError> {
    let events = EventRepository::new(state.pool.clone());
    let entity = events
        .increment_likes(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Event not found".into()))?;
    Ok(Json(entity.into()))
}

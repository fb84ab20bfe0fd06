//! Legacy ticket handlers.
//!
//! These predate the booking flow and take the client's word for
//! everything, including the ids; nothing is validated against the users
//! or events tables.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use domain::models::{Ticket, TicketDetails};
use persistence::repositories::TicketRepository;

use crate::app::AppState;
use crate::error::ApiError;

/// POST /tickets request body. Field names mirror the legacy purchase
/// form; everything defaults when absent.
#[derive(Debug, Deserialize)]
pub struct CreateTicketRequest {
    #[serde(default)]
    pub userid: String,

    #[serde(default)]
    pub eventid: String,

    #[serde(default, rename = "ticketDetails")]
    pub ticket_details: TicketDetails,

    #[serde(default)]
    pub count: i64,
}

/// POST /tickets
pub async fn create_ticket(
    State(state): State<AppState>,
    Json(request): Json<CreateTicketRequest>,
) -> Result<(StatusCode, Json<Ticket>), ApiError> {
    let tickets = TicketRepository::new(state.pool.clone());
    let entity = tickets
        .create(
            &request.userid,
            &request.eventid,
            &request.ticket_details,
            request.count,
        )
        .await?;
    Ok((StatusCode::CREATED, Json(entity.into())))
}

/// GET /tickets
pub async fn list_tickets(State(state): State<AppState>) -> Result<Json<Vec<Ticket>>, ApiError> {
    let tickets = TicketRepository::new(state.pool.clone());
    let entities = tickets.list().await?;
    Ok(Json(entities.into_iter().map(Into::into).collect()))
}

/// GET /tickets/user/:user_id
///
/// `user_id` is matched as an opaque string; an id no ticket was recorded
/// under yields an empty list, not a 404.
pub async fn list_user_tickets(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<Ticket>>, ApiError> {
    let tickets = TicketRepository::new(state.pool.clone());
    let entities = tickets.list_by_user(&user_id).await?;
    Ok(Json(entities.into_iter().map(Into::into).collect()))
}

/// DELETE /tickets/:id
pub async fn delete_ticket(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let tickets = TicketRepository::new(state.pool.clone());
    tickets.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

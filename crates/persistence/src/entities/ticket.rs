//! Legacy ticket entity (database row mapping).
//!
//! The embedded `ticketDetails` document is flattened into columns here and
//! reassembled when converting to the domain model.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use domain::models::{Ticket, TicketDetails};

/// Database row mapping for the tickets table.
#[derive(Debug, Clone, FromRow)]
pub struct TicketEntity {
    pub id: Uuid,
    pub user_id: String,
    pub event_id: String,
    pub attendee_name: String,
    pub attendee_email: String,
    pub event_name: String,
    pub event_date: String,
    pub event_time: String,
    pub ticket_price: i64,
    pub qr: String,
    pub count: i64,
    pub created_at: DateTime<Utc>,
}

impl From<TicketEntity> for Ticket {
    fn from(entity: TicketEntity) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            event_id: entity.event_id,
            ticket_details: TicketDetails {
                name: entity.attendee_name,
                email: entity.attendee_email,
                eventname: entity.event_name,
                eventdate: entity.event_date,
                eventtime: entity.event_time,
                ticketprice: entity.ticket_price,
                qr: entity.qr,
            },
            count: entity.count,
            created_at: entity.created_at,
        }
    }
}

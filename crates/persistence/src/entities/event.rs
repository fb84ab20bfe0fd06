//! Event entity (database row mapping).

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the events table.
#[derive(Debug, Clone, FromRow)]
pub struct EventEntity {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub organized_by: String,
    pub owner: String,
    pub event_date: NaiveDate,
    pub event_time: String,
    pub location: String,
    pub ticket_price: i64,
    pub image: Option<String>,
    pub likes: i64,
    pub participants: i64,
    pub head_count: i64,
    pub income: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<EventEntity> for domain::models::Event {
    fn from(entity: EventEntity) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            organized_by: entity.organized_by,
            owner: entity.owner,
            event_date: entity.event_date,
            event_time: entity.event_time,
            location: entity.location,
            ticket_price: entity.ticket_price,
            image: entity.image,
            likes: entity.likes,
            participants: entity.participants,
            head_count: entity.head_count,
            income: entity.income,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

//! Event repository for database operations.

use domain::models::NewEvent;
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::EventEntity;
use crate::metrics::QueryTimer;

/// Repository for event-catalog database operations.
#[derive(Clone)]
pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    /// Creates a new EventRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persist a new event as given; no required-field validation beyond
    /// what the schema defaults.
    pub async fn create(&self, event: &NewEvent) -> Result<EventEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_event");
        let result = sqlx::query_as::<_, EventEntity>(
            r#"
            INSERT INTO events
                (title, description, organized_by, event_date, event_time,
                 location, ticket_price, image, likes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, title, description, organized_by, owner, event_date, event_time,
                      location, ticket_price, image, likes, participants, head_count,
                      income, created_at, updated_at
            "#,
        )
        .bind(&event.title)
        .bind(&event.description)
        .bind(&event.organized_by)
        .bind(event.event_date)
        .bind(&event.event_time)
        .bind(&event.location)
        .bind(event.ticket_price)
        .bind(&event.image)
        .bind(event.likes)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Full-collection scan, no pagination.
    pub async fn list(&self) -> Result<Vec<EventEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_events");
        let result = sqlx::query_as::<_, EventEntity>(
            r#"
            SELECT id, title, description, organized_by, owner, event_date, event_time,
                   location, ticket_price, image, likes, participants, head_count,
                   income, created_at, updated_at
            FROM events
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find an event by ID.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<EventEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_event_by_id");
        let result = sqlx::query_as::<_, EventEntity>(
            r#"
            SELECT id, title, description, organized_by, owner, event_date, event_time,
                   location, ticket_price, image, likes, participants, head_count,
                   income, created_at, updated_at
            FROM events
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Hard delete with no cascade. Deleting an id that is already gone is
    /// still a success; callers treat the operation as idempotent.
    pub async fn delete(&self, id: Uuid) -> Result<(), sqlx::Error> {
        let timer = QueryTimer::new("delete_event");
        sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        timer.record();
        Ok(())
    }

    /// Read-modify-write like increment: read the counter, write back
    /// `current + 1`. Concurrent increments can lose updates (last write
    /// wins); the race window is a documented property of this operation,
    /// not an oversight to fix with locking.
    ///
    /// Returns `None` when the event is missing at either step.
    pub async fn increment_likes(&self, id: Uuid) -> Result<Option<EventEntity>, sqlx::Error> {
        let timer = QueryTimer::new("increment_event_likes");

        let current: Option<i64> = sqlx::query_scalar("SELECT likes FROM events WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        let Some(likes) = current else {
            timer.record();
            return Ok(None);
        };

        let result = sqlx::query_as::<_, EventEntity>(
            r#"
            UPDATE events
            SET likes = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING id, title, description, organized_by, owner, event_date, event_time,
                      location, ticket_price, image, likes, participants, head_count,
                      income, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(likes + 1)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }
}

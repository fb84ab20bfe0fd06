//! Legacy ticket repository for database operations.

use domain::models::TicketDetails;
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::TicketEntity;
use crate::metrics::QueryTimer;

/// Repository for legacy ticket database operations.
#[derive(Clone)]
pub struct TicketRepository {
    pool: PgPool,
}

impl TicketRepository {
    /// Creates a new TicketRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a ticket record. `user_id` and `event_id` are stored as
    /// given, including empty strings; nothing checks them against the
    /// users or events tables.
    pub async fn create(
        &self,
        user_id: &str,
        event_id: &str,
        details: &TicketDetails,
        count: i64,
    ) -> Result<TicketEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_ticket");
        let result = sqlx::query_as::<_, TicketEntity>(
            r#"
            INSERT INTO tickets
                (user_id, event_id, attendee_name, attendee_email, event_name,
                 event_date, event_time, ticket_price, qr, count)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id, user_id, event_id, attendee_name, attendee_email, event_name,
                      event_date, event_time, ticket_price, qr, count, created_at
            "#,
        )
        .bind(user_id)
        .bind(event_id)
        .bind(&details.name)
        .bind(&details.email)
        .bind(&details.eventname)
        .bind(&details.eventdate)
        .bind(&details.eventtime)
        .bind(details.ticketprice)
        .bind(&details.qr)
        .bind(count)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Full-collection scan.
    pub async fn list(&self) -> Result<Vec<TicketEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_tickets");
        let result = sqlx::query_as::<_, TicketEntity>(
            r#"
            SELECT id, user_id, event_id, attendee_name, attendee_email, event_name,
                   event_date, event_time, ticket_price, qr, count, created_at
            FROM tickets
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Tickets recorded against a given user id string.
    pub async fn list_by_user(&self, user_id: &str) -> Result<Vec<TicketEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_tickets_by_user");
        let result = sqlx::query_as::<_, TicketEntity>(
            r#"
            SELECT id, user_id, event_id, attendee_name, attendee_email, event_name,
                   event_date, event_time, ticket_price, qr, count, created_at
            FROM tickets
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Hard delete; idempotent on repeat.
    pub async fn delete(&self, id: Uuid) -> Result<(), sqlx::Error> {
        let timer = QueryTimer::new("delete_ticket");
        sqlx::query("DELETE FROM tickets WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        timer.record();
        Ok(())
    }
}

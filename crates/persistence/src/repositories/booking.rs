//! Booking repository for database operations.

use domain::models::{BookingStats, NewBooking};
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::BookingEntity;
use crate::metrics::QueryTimer;

const BOOKING_COLUMNS: &str = r#"id, name, email, phone, event_id, event_title, event_date,
                   event_time, event_location, ticket_quantity, ticket_price,
                   total_amount, payment_method, payment_status, qr_code,
                   booking_status, created_at, updated_at"#;

/// Repository for booking database operations.
#[derive(Clone)]
pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    /// Creates a new BookingRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persist a booking prepared by the booking engine.
    pub async fn create(&self, booking: &NewBooking) -> Result<BookingEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_booking");
        let sql = format!(
            r#"
            INSERT INTO bookings
                (name, email, phone, event_id, event_title, event_date, event_time,
                 event_location, ticket_quantity, ticket_price, total_amount,
                 payment_method, payment_status, qr_code, booking_status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            RETURNING {BOOKING_COLUMNS}
            "#
        );
        let result = sqlx::query_as::<_, BookingEntity>(&sql)
            .bind(&booking.name)
            .bind(&booking.email)
            .bind(&booking.phone)
            .bind(booking.event_id)
            .bind(&booking.event_title)
            .bind(&booking.event_date)
            .bind(&booking.event_time)
            .bind(&booking.event_location)
            .bind(booking.ticket_quantity)
            .bind(booking.ticket_price)
            .bind(booking.total_amount)
            .bind(&booking.payment_method)
            .bind(booking.payment_status.as_str())
            .bind(&booking.qr_code)
            .bind(booking.booking_status.as_str())
            .fetch_one(&self.pool)
            .await;
        timer.record();
        result
    }

    /// Find a booking by ID.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<BookingEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_booking_by_id");
        let sql = format!("SELECT {BOOKING_COLUMNS} FROM bookings WHERE id = $1");
        let result = sqlx::query_as::<_, BookingEntity>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await;
        timer.record();
        result
    }

    /// All bookings, newest first (admin listing order).
    pub async fn list_newest_first(&self) -> Result<Vec<BookingEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_bookings");
        let sql = format!("SELECT {BOOKING_COLUMNS} FROM bookings ORDER BY created_at DESC");
        let result = sqlx::query_as::<_, BookingEntity>(&sql)
            .fetch_all(&self.pool)
            .await;
        timer.record();
        result
    }

    /// Bookings for one event, unordered.
    pub async fn list_for_event(&self, event_id: Uuid) -> Result<Vec<BookingEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_bookings_for_event");
        let sql = format!("SELECT {BOOKING_COLUMNS} FROM bookings WHERE event_id = $1");
        let result = sqlx::query_as::<_, BookingEntity>(&sql)
            .bind(event_id)
            .fetch_all(&self.pool)
            .await;
        timer.record();
        result
    }

    /// Soft-cancel: flip `booking_status` to Cancelled and keep the row.
    /// Cancelling an already-cancelled booking succeeds and leaves the
    /// status Cancelled. Returns `None` when the id does not exist.
    pub async fn cancel(&self, id: Uuid) -> Result<Option<BookingEntity>, sqlx::Error> {
        let timer = QueryTimer::new("cancel_booking");
        let sql = format!(
            r#"
            UPDATE bookings
            SET booking_status = 'Cancelled', updated_at = NOW()
            WHERE id = $1
            RETURNING {BOOKING_COLUMNS}
            "#
        );
        let result = sqlx::query_as::<_, BookingEntity>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await;
        timer.record();
        result
    }

    /// Aggregate figures for the admin dashboard: Confirmed count, revenue
    /// over bookings that are both Completed and Confirmed, and the 10
    /// newest bookings.
    pub async fn stats(&self) -> Result<BookingStats, sqlx::Error> {
        let timer = QueryTimer::new("booking_stats");

        let (total_bookings, total_revenue, recent) = tokio::try_join!(
            self.confirmed_count(),
            self.completed_confirmed_revenue(),
            self.recent(10),
        )?;

        timer.record();
        Ok(BookingStats {
            total_bookings,
            total_revenue,
            recent_bookings: recent.into_iter().map(Into::into).collect(),
        })
    }

    async fn confirmed_count(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM bookings WHERE booking_status = 'Confirmed'")
            .fetch_one(&self.pool)
            .await
    }

    async fn completed_confirmed_revenue(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            r#"
            SELECT COALESCE(SUM(total_amount), 0)::BIGINT
            FROM bookings
            WHERE payment_status = 'Completed' AND booking_status = 'Confirmed'
            "#,
        )
        .fetch_one(&self.pool)
        .await
    }

    async fn recent(&self, limit: i64) -> Result<Vec<BookingEntity>, sqlx::Error> {
        let sql = format!("SELECT {BOOKING_COLUMNS} FROM bookings ORDER BY created_at DESC LIMIT $1");
        sqlx::query_as::<_, BookingEntity>(&sql)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
    }
}

//! Booking entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use std::str::FromStr;
use uuid::Uuid;

use domain::models::{Booking, BookingStatus, PaymentStatus};

/// Database row mapping for the bookings table.
#[derive(Debug, Clone, FromRow)]
pub struct BookingEntity {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub event_id: Uuid,
    pub event_title: String,
    pub event_date: String,
    pub event_time: String,
    pub event_location: String,
    pub ticket_quantity: i64,
    pub ticket_price: i64,
    pub total_amount: i64,
    pub payment_method: String,
    pub payment_status: String,
    pub qr_code: String,
    pub booking_status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<BookingEntity> for Booking {
    fn from(entity: BookingEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            phone: entity.phone,
            event_id: entity.event_id,
            event_title: entity.event_title,
            event_date: entity.event_date,
            event_time: entity.event_time,
            event_location: entity.event_location,
            ticket_quantity: entity.ticket_quantity,
            ticket_price: entity.ticket_price,
            total_amount: entity.total_amount,
            payment_method: entity.payment_method,
            // CHECK constraints keep these columns in range; fall back to
            // the schema defaults rather than failing a read.
            payment_status: PaymentStatus::from_str(&entity.payment_status)
                .unwrap_or(PaymentStatus::Completed),
            qr_code: entity.qr_code,
            booking_status: BookingStatus::from_str(&entity.booking_status)
                .unwrap_or(BookingStatus::Confirmed),
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(payment: &str, booking: &str) -> BookingEntity {
        BookingEntity {
            id: Uuid::new_v4(),
            name: "Sam".into(),
            email: "sam@example.com".into(),
            phone: "0712345678".into(),
            event_id: Uuid::new_v4(),
            event_title: "RustFest".into(),
            event_date: "2026-09-12".into(),
            event_time: "18:00".into(),
            event_location: "Main Hall".into(),
            ticket_quantity: 2,
            ticket_price: 100,
            total_amount: 200,
            payment_method: "Credit/Debit Card".into(),
            payment_status: payment.into(),
            qr_code: "data:image/png;base64,AAAA".into(),
            booking_status: booking.into(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn statuses_parse_from_columns() {
        let booking: Booking = entity("Pending", "Cancelled").into();
        assert_eq!(booking.payment_status, PaymentStatus::Pending);
        assert_eq!(booking.booking_status, BookingStatus::Cancelled);
    }

    #[test]
    fn unknown_statuses_fall_back_to_defaults() {
        let booking: Booking = entity("???", "???").into();
        assert_eq!(booking.payment_status, PaymentStatus::Completed);
        assert_eq!(booking.booking_status, BookingStatus::Confirmed);
    }
}

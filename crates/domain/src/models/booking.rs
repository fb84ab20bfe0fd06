//! Booking domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Payment outcome recorded on a booking.
///
/// The simulated payment flow writes `Completed` unconditionally; `Pending`
/// and `Failed` exist in the stored enum but are unreachable from the
/// booking entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Completed => "Completed",
            PaymentStatus::Failed => "Failed",
        }
    }
}

impl FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(PaymentStatus::Pending),
            "Completed" => Ok(PaymentStatus::Completed),
            "Failed" => Ok(PaymentStatus::Failed),
            _ => Err(format!("Invalid payment status: {}", s)),
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Booking lifecycle state. Cancellation is a soft-cancel: the record is
/// retained with this flag flipped, never deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Cancelled => "Cancelled",
        }
    }
}

impl FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Confirmed" => Ok(BookingStatus::Confirmed),
            "Cancelled" => Ok(BookingStatus::Cancelled),
            _ => Err(format!("Invalid booking status: {}", s)),
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A ticket-purchase record with a denormalized event snapshot.
///
/// `event_id` references an Event by id but is not foreign-key enforced:
/// deleting the event leaves the booking intact, and the snapshot fields
/// carry everything needed for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
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
    /// Price per ticket at booking time, in whole currency units.
    pub ticket_price: i64,
    /// Always `ticket_price * ticket_quantity`; computed server-side.
    pub total_amount: i64,
    pub payment_method: String,
    pub payment_status: PaymentStatus,
    /// PNG data URI of the confirmation QR code.
    pub qr_code: String,
    pub booking_status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A booking prepared by the engine, ready to persist.
#[derive(Debug, Clone)]
pub struct NewBooking {
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
    pub payment_status: PaymentStatus,
    pub qr_code: String,
    pub booking_status: BookingStatus,
}

/// Aggregate figures for the admin dashboard.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingStats {
    /// Number of bookings with status Confirmed.
    pub total_bookings: i64,
    /// Sum of `total_amount` over bookings that are both Completed and
    /// Confirmed; bookings differing in either field are excluded.
    pub total_revenue: i64,
    /// The 10 newest bookings by creation time.
    pub recent_bookings: Vec<Booking>,
}

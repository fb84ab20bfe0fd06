//! The booking engine.
//!
//! The one component with real multi-step logic: validates contact and
//! payment-form fields, computes the total from the event's price, renders
//! the confirmation QR code, and assembles the record to persist. Card
//! details are validated and discarded; no authorization happens and no
//! card data is ever stored.

use serde::Deserialize;
use thiserror::Error;
use uuid::Uuid;
use validator::Validate;

use crate::models::{BookingStatus, Event, NewBooking, PaymentStatus};
use shared::qr::{self, QrError};

/// Payment method recorded when the client does not name one.
pub const DEFAULT_PAYMENT_METHOD: &str = "Credit/Debit Card";

/// Errors produced by the booking engine.
#[derive(Debug, Error)]
pub enum BookingError {
    #[error("Validation failed: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Total amount is out of range")]
    TotalOutOfRange,

    #[error("QR generation failed: {0}")]
    Qr(#[from] QrError),
}

/// Simulated payment form. Validated for shape only.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PaymentForm {
    #[validate(length(min = 1, message = "Name on card is required"))]
    pub name_on_card: String,

    #[validate(custom(function = "shared::validation::validate_card_number"))]
    pub card_number: String,

    #[validate(custom(function = "shared::validation::validate_card_expiry"))]
    pub expiry_date: String,

    #[validate(custom(function = "shared::validation::validate_cvv"))]
    pub cvv: String,
}

/// A ticket-purchase submission from the payment page.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(custom(function = "shared::validation::validate_phone"))]
    pub phone: String,

    pub event_id: Uuid,

    #[validate(custom(function = "shared::validation::validate_ticket_quantity"))]
    pub ticket_quantity: i64,

    #[serde(default)]
    pub payment_method: Option<String>,

    #[validate(nested)]
    pub payment: PaymentForm,
}

/// The text block encoded into the confirmation QR code. Human-readable by
/// design; it stands in for a real verification token.
fn qr_payload(event: &Event, name: &str, email: &str) -> String {
    format!(
        "Booking Confirmed\nEvent: {}\nName: {}\nEmail: {}\nDate: {}\nTime: {}",
        event.title,
        name,
        email,
        event.date_string(),
        event.event_time
    )
}

/// Runs the booking flow against a fetched event and returns the record to
/// persist.
///
/// The total is always `ticket_price * ticket_quantity`, computed here
/// rather than trusted from the client. Payment and booking statuses are
/// written as Completed/Confirmed unconditionally; this flow has no
/// failure path that produces anything else.
pub fn prepare_booking(event: &Event, request: &BookingRequest) -> Result<NewBooking, BookingError> {
    request.validate()?;

    // Quantity is only bounded below, so guard the multiplication; an
    // absurd quantity is a client error, not a wrapped negative total.
    let total_amount = event
        .ticket_price
        .checked_mul(request.ticket_quantity)
        .ok_or(BookingError::TotalOutOfRange)?;
    let qr_code = qr::data_uri(&qr_payload(event, &request.name, &request.email))?;

    Ok(NewBooking {
        name: request.name.clone(),
        email: request.email.clone(),
        phone: request.phone.clone(),
        event_id: event.id,
        event_title: event.title.clone(),
        event_date: event.date_string(),
        event_time: event.event_time.clone(),
        event_location: event.location.clone(),
        ticket_quantity: request.ticket_quantity,
        ticket_price: event.ticket_price,
        total_amount,
        payment_method: request
            .payment_method
            .clone()
            .unwrap_or_else(|| DEFAULT_PAYMENT_METHOD.to_string()),
        payment_status: PaymentStatus::Completed,
        qr_code,
        booking_status: BookingStatus::Confirmed,
    })
}

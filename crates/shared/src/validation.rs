//! Validation helpers for booking contact and payment-form fields.
//!
//! Card validation here is purely presentational: the payment flow is
//! simulated and no authorization ever happens. Card data is validated at
//! the boundary and then discarded.

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    static ref PHONE_RE: Regex = Regex::new(r"^\d{10}$").unwrap();
    static ref CARD_NUMBER_RE: Regex = Regex::new(r"^\d{16}$").unwrap();
    static ref CARD_EXPIRY_RE: Regex = Regex::new(r"^(0[1-9]|1[0-2])/\d{2}$").unwrap();
    static ref CVV_RE: Regex = Regex::new(r"^\d{3}$").unwrap();
}

fn error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}

/// Validates that a phone number is exactly 10 digits (spaces tolerated).
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let digits: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    if PHONE_RE.is_match(&digits) {
        Ok(())
    } else {
        Err(error("phone", "Phone number must be 10 digits"))
    }
}

/// Validates that a card number is exactly 16 digits (spaces tolerated).
pub fn validate_card_number(card_number: &str) -> Result<(), ValidationError> {
    let digits: String = card_number.chars().filter(|c| !c.is_whitespace()).collect();
    if CARD_NUMBER_RE.is_match(&digits) {
        Ok(())
    } else {
        Err(error("card_number", "Card number must be 16 digits"))
    }
}

/// Validates that a card expiry is in MM/YY format with a real month.
pub fn validate_card_expiry(expiry: &str) -> Result<(), ValidationError> {
    if CARD_EXPIRY_RE.is_match(expiry) {
        Ok(())
    } else {
        Err(error("card_expiry", "Expiry date must be MM/YY format"))
    }
}

/// Validates that a CVV is exactly 3 digits.
pub fn validate_cvv(cvv: &str) -> Result<(), ValidationError> {
    if CVV_RE.is_match(cvv) {
        Ok(())
    } else {
        Err(error("cvv", "CVV must be 3 digits"))
    }
}

/// Validates that a ticket quantity is at least 1.
pub fn validate_ticket_quantity(quantity: i64) -> Result<(), ValidationError> {
    if quantity >= 1 {
        Ok(())
    } else {
        Err(error("ticket_quantity", "Ticket quantity must be at least 1"))
    }
}

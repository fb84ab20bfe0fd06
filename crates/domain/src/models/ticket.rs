//! Legacy ticket domain model.
//!
//! Tickets predate the Booking flow and are kept as a separate entity: it
//! is unclear from the source whether they were mid-migration toward
//! Bookings or a deliberate second feature, so the two are preserved side
//! by side without merging.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Denormalized display details embedded in a ticket.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketDetails {
    pub name: String,
    pub email: String,
    pub eventname: String,
    pub eventdate: String,
    pub eventtime: String,
    pub ticketprice: i64,
    pub qr: String,
}

/// A legacy ticket-purchase record.
///
/// `user_id` and `event_id` are free-form strings and are not validated as
/// existing references; nothing enforces them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: Uuid,
    pub user_id: String,
    pub event_id: String,
    pub ticket_details: TicketDetails,
    pub count: i64,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn details_default_to_empty() {
        let details = TicketDetails::default();
        assert_eq!(details.name, "");
        assert_eq!(details.ticketprice, 0);
    }

    #[test]
    fn serializes_embedded_details() {
        let ticket = Ticket {
            id: Uuid::new_v4(),
            user_id: "".into(),
            event_id: "evt-1".into(),
            ticket_details: TicketDetails {
                name: "Sam".into(),
                email: "sam@example.com".into(),
                eventname: "RustFest".into(),
                eventdate: "2026-09-12".into(),
                eventtime: "18:00".into(),
                ticketprice: 250,
                qr: "data:image/png;base64,AAAA".into(),
            },
            count: 2,
            created_at: Utc::now(),
        };
        let json = serde_json::to_string(&ticket).unwrap();
        assert!(json.contains("\"ticketDetails\""));
        assert!(json.contains("\"eventname\":\"RustFest\""));
        assert!(json.contains("\"count\":2"));
    }
}

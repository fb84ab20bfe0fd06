//! Domain models for Evento.

pub mod booking;
pub mod event;
pub mod ticket;
pub mod user;

pub use booking::{Booking, BookingStats, BookingStatus, NewBooking, PaymentStatus};
pub use event::{Event, NewEvent};
pub use ticket::{Ticket, TicketDetails};
pub use user::{Admin, User};

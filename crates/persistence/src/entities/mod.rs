//! Database row mappings.

pub mod booking;
pub mod event;
pub mod ticket;
pub mod user;

pub use booking::BookingEntity;
pub use event::EventEntity;
pub use ticket::TicketEntity;
pub use user::{AdminEntity, UserEntity};

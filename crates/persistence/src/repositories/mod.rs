//! Repository implementations, one per collection.

pub mod admin;
pub mod booking;
pub mod event;
pub mod ticket;
pub mod user;

pub use admin::AdminRepository;
pub use booking::BookingRepository;
pub use event::EventRepository;
pub use ticket::TicketRepository;
pub use user::UserRepository;

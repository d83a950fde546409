pub mod models;
pub mod repository;
pub mod service;

pub use models::{Booking, BookingReceipt, BookingRequest, BookingStatus};
pub use repository::BookingRepository;
pub use service::{BookingError, BookingService};

pub mod listing;
pub mod repository;
pub mod search;

pub use listing::{FlightListing, ListingError, NewFlightListing};
pub use repository::ListingRepository;
pub use search::SearchFilters;

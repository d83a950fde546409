use async_trait::async_trait;
use uuid::Uuid;

use crate::listing::{FlightListing, NewFlightListing};
use crate::search::SearchFilters;

/// Repository trait for flight listing access
#[async_trait]
pub trait ListingRepository: Send + Sync {
    async fn insert_listing(
        &self,
        listing: NewFlightListing,
    ) -> Result<Uuid, Box<dyn std::error::Error + Send + Sync>>;

    async fn find_listing(
        &self,
        id: Uuid,
    ) -> Result<Option<FlightListing>, Box<dyn std::error::Error + Send + Sync>>;

    async fn list_listings(
        &self,
        filters: &SearchFilters,
    ) -> Result<Vec<FlightListing>, Box<dyn std::error::Error + Send + Sync>>;

    /// Decrement `seats_available` by `count` only if at least `count` seats
    /// remain. Returns whether the update applied.
    async fn reserve_seats(
        &self,
        id: Uuid,
        count: i32,
    ) -> Result<bool, Box<dyn std::error::Error + Send + Sync>>;

    /// Compensating increment for a reservation that could not stand.
    async fn release_seats(
        &self,
        id: Uuid,
        count: i32,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

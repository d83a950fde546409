use async_trait::async_trait;
use uuid::Uuid;

use crate::models::Booking;

/// Repository trait for booking record access
#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn insert_booking(
        &self,
        booking: &Booking,
    ) -> Result<Uuid, Box<dyn std::error::Error + Send + Sync>>;
}

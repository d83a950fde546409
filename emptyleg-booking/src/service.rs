use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info};
use uuid::Uuid;

use emptyleg_catalog::ListingRepository;

use crate::models::{Booking, BookingReceipt, BookingRequest, BookingStatus};
use crate::repository::BookingRepository;

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("{0}")]
    NotFound(String),

    #[error("store error: {0}")]
    Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Booking pipeline: validate the request against the referenced listing,
/// reserve the seats, persist the record.
pub struct BookingService {
    listings: Arc<dyn ListingRepository>,
    bookings: Arc<dyn BookingRepository>,
}

impl BookingService {
    pub fn new(
        listings: Arc<dyn ListingRepository>,
        bookings: Arc<dyn BookingRepository>,
    ) -> Self {
        Self { listings, bookings }
    }

    pub async fn book(&self, req: BookingRequest) -> Result<BookingReceipt, BookingError> {
        let flight_id = Uuid::parse_str(&req.flight_id)
            .map_err(|_| BookingError::InvalidArgument("Invalid flight_id".to_string()))?;

        let listing = self
            .listings
            .find_listing(flight_id)
            .await
            .map_err(BookingError::Store)?
            .ok_or_else(|| BookingError::NotFound("Flight not found".to_string()))?;

        if req.passengers < 1 || req.passengers > listing.seats_available {
            return Err(BookingError::InvalidArgument(
                "Invalid passengers count".to_string(),
            ));
        }

        // Guarded decrement; a concurrent booking may have consumed the
        // seats since the check above.
        let reserved = self
            .listings
            .reserve_seats(flight_id, req.passengers)
            .await
            .map_err(BookingError::Store)?;
        if !reserved {
            return Err(BookingError::InvalidArgument(
                "Invalid passengers count".to_string(),
            ));
        }

        let booking = Booking {
            id: Uuid::new_v4(),
            flight_id,
            name: req.name,
            email: req.email,
            phone: req.phone,
            passengers: req.passengers,
            notes: req.notes,
            status: BookingStatus::Pending,
            created_at: Utc::now(),
        };

        let booking_id = match self.bookings.insert_booking(&booking).await {
            Ok(id) => id,
            Err(e) => {
                // The seats already came out of the listing; put them back
                // before surfacing the failure.
                if let Err(release_err) = self
                    .listings
                    .release_seats(flight_id, booking.passengers)
                    .await
                {
                    error!(
                        "Failed to release {} seats on flight {}: {}",
                        booking.passengers, flight_id, release_err
                    );
                }
                return Err(BookingError::Store(e));
            }
        };

        info!("Booking {} created for flight {}", booking_id, flight_id);

        Ok(BookingReceipt {
            booking_id,
            status: BookingStatus::Pending,
        })
    }
}

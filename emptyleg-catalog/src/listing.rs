use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A published empty-leg flight offer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightListing {
    pub id: Uuid,
    pub operator: String,
    pub aircraft_type: String,
    pub origin: String,
    pub origin_city: Option<String>,
    pub destination: String,
    pub destination_city: Option<String>,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub seats_available: i32,
    pub price: f64,
    pub currency: String,
    pub notes: Option<String>,
}

/// Listing payload as submitted by an operator, before the store assigns an id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFlightListing {
    pub operator: String,
    pub aircraft_type: String,
    pub origin: String,
    pub origin_city: Option<String>,
    pub destination: String,
    pub destination_city: Option<String>,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub seats_available: i32,
    pub price: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    pub notes: Option<String>,
}

fn default_currency() -> String {
    "USD".to_string()
}

/// Normalize an IATA airport code for storage and comparison.
pub fn normalize_iata(code: &str) -> String {
    code.trim().to_uppercase()
}

impl NewFlightListing {
    /// Enforce numeric bounds and normalize airport codes.
    pub fn validate(mut self) -> Result<Self, ListingError> {
        if self.seats_available < 0 {
            return Err(ListingError::InvalidSeats(self.seats_available));
        }
        if self.price < 0.0 {
            return Err(ListingError::InvalidPrice(self.price));
        }
        self.origin = normalize_iata(&self.origin);
        self.destination = normalize_iata(&self.destination);
        Ok(self)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ListingError {
    #[error("seats_available must not be negative, got {0}")]
    InvalidSeats(i32),

    #[error("price must not be negative, got {0}")]
    InvalidPrice(f64),
}

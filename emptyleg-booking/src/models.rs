use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A customer's persisted seat reservation against a listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    /// Non-owning reference; the listing may be removed independently.
    pub flight_id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub passengers: i32,
    pub notes: Option<String>,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

/// Only `Pending` is produced by the booking flow; the other states are set
/// by administrative processes outside this service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wire payload for a booking attempt. `flight_id` arrives as an opaque
/// string and is parsed by the service.
#[derive(Debug, Clone, Deserialize)]
pub struct BookingRequest {
    pub flight_id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub passengers: i32,
    pub notes: Option<String>,
}

/// Outcome of a successful booking call.
#[derive(Debug, Serialize)]
pub struct BookingReceipt {
    pub booking_id: Uuid,
    pub status: BookingStatus,
}

use chrono::{DateTime, NaiveDate, Utc};

use crate::listing::{normalize_iata, FlightListing};

/// Result cap applied when the caller does not supply one.
pub const DEFAULT_LIMIT: i64 = 50;

/// Recognized listing search options. Airport codes are held uppercase;
/// build via [`SearchFilters::from_params`] to get the normalization and
/// the ignore-on-unparseable date behavior.
#[derive(Debug, Clone)]
pub struct SearchFilters {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub date: Option<NaiveDate>,
    pub limit: i64,
}

impl Default for SearchFilters {
    fn default() -> Self {
        Self {
            origin: None,
            destination: None,
            date: None,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl SearchFilters {
    pub fn from_params(
        origin: Option<String>,
        destination: Option<String>,
        date: Option<String>,
        limit: Option<i64>,
    ) -> Self {
        Self {
            origin: origin.map(|o| normalize_iata(&o)),
            destination: destination.map(|d| normalize_iata(&d)),
            // An unparseable date disables the date filter rather than erroring.
            date: date.and_then(|d| d.parse::<NaiveDate>().ok()),
            limit: limit.unwrap_or(DEFAULT_LIMIT),
        }
    }

    /// UTC day window matched against `departure_time`:
    /// `[date 00:00:00, date 23:59:59]`, both bounds inclusive.
    pub fn departure_window(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let date = self.date?;
        let start = date.and_hms_opt(0, 0, 0)?.and_utc();
        let end = date.and_hms_opt(23, 59, 59)?.and_utc();
        Some((start, end))
    }

    /// Whether a listing passes every active filter.
    pub fn matches(&self, listing: &FlightListing) -> bool {
        if let Some(origin) = &self.origin {
            if &listing.origin != origin {
                return false;
            }
        }
        if let Some(destination) = &self.destination {
            if &listing.destination != destination {
                return false;
            }
        }
        if let Some((start, end)) = self.departure_window() {
            if listing.departure_time < start || listing.departure_time > end {
                return false;
            }
        }
        true
    }
}

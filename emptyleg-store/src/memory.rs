use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use emptyleg_booking::{Booking, BookingRepository};
use emptyleg_catalog::{FlightListing, ListingRepository, NewFlightListing, SearchFilters};

/// In-memory store for tests and local development. The capacity check and
/// the decrement run under one lock, so the guarded-reservation contract
/// holds here the same way it does in the Postgres store.
#[derive(Default)]
pub struct InMemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    listings: HashMap<Uuid, FlightListing>,
    insertion_order: Vec<Uuid>,
    bookings: HashMap<Uuid, Booking>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn booking_count(&self) -> usize {
        self.inner.lock().unwrap().bookings.len()
    }

    pub fn get_booking(&self, id: Uuid) -> Option<Booking> {
        self.inner.lock().unwrap().bookings.get(&id).cloned()
    }
}

#[async_trait]
impl ListingRepository for InMemoryStore {
    async fn insert_listing(
        &self,
        listing: NewFlightListing,
    ) -> Result<Uuid, Box<dyn std::error::Error + Send + Sync>> {
        let id = Uuid::new_v4();
        let mut inner = self.inner.lock().unwrap();
        inner.listings.insert(
            id,
            FlightListing {
                id,
                operator: listing.operator,
                aircraft_type: listing.aircraft_type,
                origin: listing.origin,
                origin_city: listing.origin_city,
                destination: listing.destination,
                destination_city: listing.destination_city,
                departure_time: listing.departure_time,
                arrival_time: listing.arrival_time,
                seats_available: listing.seats_available,
                price: listing.price,
                currency: listing.currency,
                notes: listing.notes,
            },
        );
        inner.insertion_order.push(id);
        Ok(id)
    }

    async fn find_listing(
        &self,
        id: Uuid,
    ) -> Result<Option<FlightListing>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.inner.lock().unwrap().listings.get(&id).cloned())
    }

    async fn list_listings(
        &self,
        filters: &SearchFilters,
    ) -> Result<Vec<FlightListing>, Box<dyn std::error::Error + Send + Sync>> {
        let inner = self.inner.lock().unwrap();
        let results = inner
            .insertion_order
            .iter()
            .filter_map(|id| inner.listings.get(id))
            .filter(|listing| filters.matches(listing))
            .take(filters.limit.max(0) as usize)
            .cloned()
            .collect();
        Ok(results)
    }

    async fn reserve_seats(
        &self,
        id: Uuid,
        count: i32,
    ) -> Result<bool, Box<dyn std::error::Error + Send + Sync>> {
        let mut inner = self.inner.lock().unwrap();
        match inner.listings.get_mut(&id) {
            Some(listing) if listing.seats_available >= count => {
                listing.seats_available -= count;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn release_seats(
        &self,
        id: Uuid,
        count: i32,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(listing) = inner.listings.get_mut(&id) {
            listing.seats_available += count;
        }
        Ok(())
    }
}

#[async_trait]
impl BookingRepository for InMemoryStore {
    async fn insert_booking(
        &self,
        booking: &Booking,
    ) -> Result<Uuid, Box<dyn std::error::Error + Send + Sync>> {
        let mut inner = self.inner.lock().unwrap();
        inner.bookings.insert(booking.id, booking.clone());
        Ok(booking.id)
    }
}

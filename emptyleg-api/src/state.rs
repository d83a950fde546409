use std::sync::Arc;

use emptyleg_booking::BookingService;
use emptyleg_catalog::ListingRepository;
use emptyleg_store::DbClient;

/// Configuration facts captured once at startup, reported by /test.
#[derive(Clone)]
pub struct StoreInfo {
    pub url_configured: bool,
    pub database_name: Option<String>,
}

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DbClient>,
    pub listings: Arc<dyn ListingRepository>,
    pub booking_service: Arc<BookingService>,
    pub store_info: StoreInfo,
}

use std::net::SocketAddr;
use std::sync::Arc;

use emptyleg_api::{
    app,
    state::{AppState, StoreInfo},
};
use emptyleg_booking::BookingService;
use emptyleg_store::{
    app_config::Config, DbClient, PostgresBookingRepository, PostgresListingRepository,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "emptyleg_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().expect("Failed to load config");
    tracing::info!("Starting Empty Leg Flights API on port {}", config.server.port);

    let db = Arc::new(DbClient::new(&config.database.url).expect("Invalid database connection string"));

    if let Err(e) = db.migrate().await {
        tracing::warn!("Skipping migrations, store not reachable: {}", e);
    }

    let listings = Arc::new(PostgresListingRepository::new(db.pool.clone()));
    let bookings = Arc::new(PostgresBookingRepository::new(db.pool.clone()));
    let booking_service = Arc::new(BookingService::new(listings.clone(), bookings));

    let app_state = AppState {
        db: db.clone(),
        listings,
        booking_service,
        store_info: StoreInfo {
            url_configured: Config::database_url_configured(),
            database_name: config.database.name.clone(),
        },
    };

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

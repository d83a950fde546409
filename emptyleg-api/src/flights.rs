use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use emptyleg_catalog::{FlightListing, NewFlightListing, SearchFilters};

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/flights", get(list_flights).post(create_flight))
        .route("/api/seed", post(seed))
}

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ListFlightsQuery {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub date: Option<String>,
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct FlightResponse {
    pub id: String,
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

impl From<FlightListing> for FlightResponse {
    fn from(listing: FlightListing) -> Self {
        FlightResponse {
            id: listing.id.to_string(),
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
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreateFlightResponse {
    pub id: String,
}

#[derive(Debug, Serialize)]
pub struct SeedResponse {
    pub inserted_id: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/flights
/// Public listing search with optional origin/destination/date filters.
async fn list_flights(
    State(state): State<AppState>,
    Query(query): Query<ListFlightsQuery>,
) -> Result<Json<Vec<FlightResponse>>, AppError> {
    let filters =
        SearchFilters::from_params(query.origin, query.destination, query.date, query.limit);

    let listings = state
        .listings
        .list_listings(&filters)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(listings.into_iter().map(FlightResponse::from).collect()))
}

/// POST /api/flights
/// Operator-facing listing creation.
async fn create_flight(
    State(state): State<AppState>,
    Json(req): Json<NewFlightListing>,
) -> Result<Json<CreateFlightResponse>, AppError> {
    let listing = req.validate()?;

    let id = state
        .listings
        .insert_listing(listing)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(CreateFlightResponse { id: id.to_string() }))
}

/// POST /api/seed
/// Inserts one demonstration listing; no input.
async fn seed(State(state): State<AppState>) -> Result<Json<SeedResponse>, AppError> {
    let now = Utc::now();
    let sample = NewFlightListing {
        operator: "SkyJet".to_string(),
        aircraft_type: "Citation XLS+".to_string(),
        origin: "LAS".to_string(),
        origin_city: Some("Las Vegas".to_string()),
        destination: "VNY".to_string(),
        destination_city: Some("Los Angeles".to_string()),
        departure_time: now,
        arrival_time: now,
        seats_available: 6,
        price: 8900.0,
        currency: "USD".to_string(),
        notes: Some("Flexible within +/- 6 hours".to_string()),
    };

    let id = state
        .listings
        .insert_listing(sample)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Json(SeedResponse {
        inserted_id: id.to_string(),
    }))
}

use axum::{extract::State, routing::post, Json, Router};
use serde::Serialize;

use emptyleg_booking::BookingRequest;

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/book", post(create_booking))
}

#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub booking_id: String,
    pub status: String,
}

/// POST /api/book
/// Reserve seats on a listing; the whole pipeline lives in BookingService.
async fn create_booking(
    State(state): State<AppState>,
    Json(req): Json<BookingRequest>,
) -> Result<Json<BookingResponse>, AppError> {
    let receipt = state.booking_service.book(req).await?;

    Ok(Json(BookingResponse {
        booking_id: receipt.booking_id.to_string(),
        status: receipt.status.to_string(),
    }))
}

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::util::ServiceExt;

use emptyleg_api::app;
use emptyleg_api::state::{AppState, StoreInfo};
use emptyleg_booking::BookingService;
use emptyleg_store::{DbClient, InMemoryStore};

/// Build the full router against the in-memory store, with the same layer
/// stack the binary uses.
fn test_app() -> Router {
    let store = Arc::new(InMemoryStore::new());
    let booking_service = Arc::new(BookingService::new(store.clone(), store.clone()));
    // Lazy pool; never connected by these tests.
    let db = Arc::new(DbClient::new("postgres://localhost:5432/emptyleg_test").unwrap());

    let state = AppState {
        db,
        listings: store,
        booking_service,
        store_info: StoreInfo {
            url_configured: false,
            database_name: None,
        },
    };

    app(state)
}

async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn flight_body(origin: &str, departure: &str, seats: i32) -> Value {
    json!({
        "operator": "SkyJet",
        "aircraft_type": "Citation XLS+",
        "origin": origin,
        "origin_city": "Las Vegas",
        "destination": "VNY",
        "destination_city": "Los Angeles",
        "departure_time": departure,
        "arrival_time": departure,
        "seats_available": seats,
        "price": 8900.0,
        "currency": "USD",
        "notes": "Flexible within +/- 6 hours"
    })
}

#[tokio::test]
async fn root_reports_running() {
    let response = get(test_app(), "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["message"], "Empty Leg Flights API running");
}

#[tokio::test]
async fn create_and_list_round_trip() {
    let app = test_app();

    let response = post_json(
        app.clone(),
        "/api/flights",
        flight_body("LAS", "2024-05-01T10:00:00Z", 6),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let created = body_json(response).await;
    let id = created["id"].as_str().unwrap().to_string();

    let response = get(app, "/api/flights").await;
    assert_eq!(response.status(), StatusCode::OK);
    let listings = body_json(response).await;
    let listings = listings.as_array().unwrap();
    assert_eq!(listings.len(), 1);

    let listing = &listings[0];
    assert_eq!(listing["id"], id.as_str());
    assert_eq!(listing["operator"], "SkyJet");
    assert_eq!(listing["aircraft_type"], "Citation XLS+");
    assert_eq!(listing["origin"], "LAS");
    assert_eq!(listing["origin_city"], "Las Vegas");
    assert_eq!(listing["destination"], "VNY");
    assert_eq!(listing["destination_city"], "Los Angeles");
    assert_eq!(listing["departure_time"], "2024-05-01T10:00:00Z");
    assert_eq!(listing["seats_available"], 6);
    assert_eq!(listing["price"], 8900.0);
    assert_eq!(listing["currency"], "USD");
    assert_eq!(listing["notes"], "Flexible within +/- 6 hours");
}

#[tokio::test]
async fn create_rejects_negative_seats() {
    let response = post_json(
        test_app(),
        "/api/flights",
        flight_body("LAS", "2024-05-01T10:00:00Z", -1),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["detail"].is_string());
}

#[tokio::test]
async fn origin_filter_is_case_insensitive() {
    let app = test_app();
    post_json(
        app.clone(),
        "/api/flights",
        flight_body("LAS", "2024-05-01T10:00:00Z", 6),
    )
    .await;

    let response = get(app.clone(), "/api/flights?origin=las").await;
    let listings = body_json(response).await;
    assert_eq!(listings.as_array().unwrap().len(), 1);

    let response = get(app, "/api/flights?origin=jfk").await;
    let listings = body_json(response).await;
    assert_eq!(listings.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn date_filter_matches_departure_day() {
    let app = test_app();
    post_json(
        app.clone(),
        "/api/flights",
        flight_body("LAS", "2024-05-01T10:00:00Z", 6),
    )
    .await;
    post_json(
        app.clone(),
        "/api/flights",
        flight_body("LAS", "2024-05-02T00:00:01Z", 6),
    )
    .await;

    let response = get(app.clone(), "/api/flights?date=2024-05-01").await;
    let listings = body_json(response).await;
    let listings = listings.as_array().unwrap();
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0]["departure_time"], "2024-05-01T10:00:00Z");

    // Malformed dates disable the filter instead of erroring.
    let response = get(app, "/api/flights?date=not-a-date").await;
    let listings = body_json(response).await;
    assert_eq!(listings.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn limit_caps_results() {
    let app = test_app();
    for day in ["01", "02", "03"] {
        post_json(
            app.clone(),
            "/api/flights",
            flight_body("LAS", &format!("2024-05-{day}T10:00:00Z"), 6),
        )
        .await;
    }

    let response = get(app, "/api/flights?limit=2").await;
    let listings = body_json(response).await;
    assert_eq!(listings.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn identical_queries_are_idempotent() {
    let app = test_app();
    post_json(app.clone(), "/api/seed", json!({})).await;

    let first = body_json(get(app.clone(), "/api/flights?origin=las").await).await;
    let second = body_json(get(app, "/api/flights?origin=las").await).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn seed_inserts_demo_listing() {
    let app = test_app();

    let response = post_json(app.clone(), "/api/seed", json!({})).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["inserted_id"].is_string());

    let listings = body_json(get(app, "/api/flights").await).await;
    let listings = listings.as_array().unwrap();
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0]["operator"], "SkyJet");
    assert_eq!(listings[0]["origin"], "LAS");
    assert_eq!(listings[0]["seats_available"], 6);
}

#[tokio::test]
async fn booking_decrements_seats_and_rejects_overflow() {
    let app = test_app();

    let created = body_json(
        post_json(
            app.clone(),
            "/api/flights",
            flight_body("LAS", "2024-05-01T10:00:00Z", 6),
        )
        .await,
    )
    .await;
    let flight_id = created["id"].as_str().unwrap().to_string();

    let response = post_json(
        app.clone(),
        "/api/book",
        json!({
            "flight_id": flight_id,
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "passengers": 6
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let receipt = body_json(response).await;
    assert!(receipt["booking_id"].is_string());
    assert_eq!(receipt["status"], "pending");

    let listings = body_json(get(app.clone(), "/api/flights").await).await;
    assert_eq!(listings[0]["seats_available"], 0);

    // The listing is drained; one more passenger must be rejected.
    let response = post_json(
        app,
        "/api/book",
        json!({
            "flight_id": flight_id,
            "name": "Grace Hopper",
            "email": "grace@example.com",
            "passengers": 1
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["detail"], "Invalid passengers count");
}

#[tokio::test]
async fn booking_unknown_flight_is_not_found() {
    let response = post_json(
        test_app(),
        "/api/book",
        json!({
            "flight_id": "00000000-0000-0000-0000-000000000000",
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "passengers": 1
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["detail"], "Flight not found");
}

#[tokio::test]
async fn booking_malformed_flight_id_is_rejected() {
    let response = post_json(
        test_app(),
        "/api/book",
        json!({
            "flight_id": "not-a-valid-id",
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "passengers": 1
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["detail"], "Invalid flight_id");
}

use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/test", get(test_store))
}

/// GET /
async fn root() -> Json<Value> {
    Json(json!({ "message": "Empty Leg Flights API running" }))
}

/// GET /test
/// Store connectivity report. Degraded store states land in the body, never
/// in the status code.
async fn test_store(State(state): State<AppState>) -> Json<Value> {
    let database_url = if state.store_info.url_configured {
        "set"
    } else {
        "not set"
    };

    let mut response = json!({
        "backend": "running",
        "database": "not available",
        "database_url": database_url,
        "database_name": state.store_info.database_name,
        "connection_status": "Not Connected",
        "collections": [],
    });

    match state.db.ping().await {
        Ok(()) => {
            response["database"] = json!("connected");
            response["connection_status"] = json!("Connected");
            match state.db.list_tables(10).await {
                Ok(tables) => response["collections"] = json!(tables),
                Err(e) => {
                    response["database"] = json!(format!("connected but error: {}", e));
                }
            }
        }
        Err(e) => {
            response["database"] = json!(format!("error: {}", e));
        }
    }

    Json(response)
}

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use crate::{error::AppError, models::trip::TripDraft, routes::server_error, state::AppState};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/trips", post(save_trip).get(list_trips))
        .route("/trips/stats", get(trip_stats))
        .route("/trips/:id", delete(delete_trip))
}

async fn save_trip(State(state): State<AppState>, Json(draft): Json<TripDraft>) -> Response {
    match state.trips.save_trip(draft).await {
        Ok(trip) => (StatusCode::CREATED, Json(trip)).into_response(),
        Err(err @ AppError::Validation(_)) => err.into_response(),
        Err(err) => {
            error!("saving trip failed: {err}");
            server_error("Error saving trip")
        }
    }
}

#[derive(Debug, Deserialize)]
struct ListQuery {
    page: Option<i64>,
    limit: Option<i64>,
}

async fn list_trips(State(state): State<AppState>, Query(query): Query<ListQuery>) -> Response {
    match state.trips.list_trips(query.page, query.limit).await {
        Ok(page) => Json(page).into_response(),
        Err(err) => {
            error!("listing trips failed: {err}");
            server_error("Error fetching trips")
        }
    }
}

async fn delete_trip(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.trips.delete_trip(&id).await {
        Ok(()) => Json(json!({ "message": "Trip deleted successfully" })).into_response(),
        Err(err @ AppError::NotFound) => err.into_response(),
        Err(err) => {
            error!("deleting trip failed: {err}");
            server_error("Error deleting trip")
        }
    }
}

async fn trip_stats(State(state): State<AppState>) -> Response {
    match state.trips.stats().await {
        Ok(stats) => Json(stats).into_response(),
        Err(err) => {
            error!("fetching trip statistics failed: {err}");
            server_error("Error fetching trip statistics")
        }
    }
}

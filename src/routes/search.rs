use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tracing::error;

use crate::{
    error::AppError, models::trip::location_code_finding, routes::server_error, state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/search", get(search_trips))
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    origin: Option<String>,
    destination: Option<String>,
    sort_by: Option<String>,
}

async fn search_trips(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Response {
    let findings: Vec<String> = [
        location_code_finding("querystring", "origin", query.origin.as_deref()),
        location_code_finding("querystring", "destination", query.destination.as_deref()),
    ]
    .into_iter()
    .flatten()
    .collect();

    if !findings.is_empty() {
        return AppError::Validation(findings).into_response();
    }

    // Validation guarantees both parameters are present.
    let origin = query.origin.unwrap_or_default();
    let destination = query.destination.unwrap_or_default();

    match state
        .trips
        .search_trips(&origin, &destination, query.sort_by.as_deref())
        .await
    {
        Ok(results) => Json(results).into_response(),
        Err(err) => {
            error!("searching trips failed: {err}");
            server_error("Error fetching trips")
        }
    }
}

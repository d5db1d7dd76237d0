use airease_shared::{FlightDetail, FlightSearchResponse, PriceHistory, SearchQuery};
use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    routing::get,
    Json, Router,
};

use crate::{error::AppError, middleware::auth::is_authenticated, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/flights/search", get(search_flights))
        .route("/v1/flights/{flight_id}", get(get_flight_detail))
        .route("/v1/flights/{flight_id}/price-history", get(get_price_history))
}

/// GET /v1/flights/search?from=&to=&date=&cabin=
async fn search_flights(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<SearchQuery>,
) -> Result<Json<FlightSearchResponse>, AppError> {
    let authenticated = is_authenticated(&headers, &state.auth.secret);
    let response = state.flights.search(&query, authenticated).await?;
    Ok(Json(response))
}

/// GET /v1/flights/{flight_id}
async fn get_flight_detail(
    State(state): State<AppState>,
    Path(flight_id): Path<String>,
) -> Result<Json<FlightDetail>, AppError> {
    Ok(Json(state.flights.flight_detail(&flight_id).await?))
}

/// GET /v1/flights/{flight_id}/price-history
async fn get_price_history(
    State(state): State<AppState>,
    Path(flight_id): Path<String>,
) -> Result<Json<PriceHistory>, AppError> {
    Ok(Json(state.flights.price_history(&flight_id).await?))
}

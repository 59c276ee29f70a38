//! HTTP handlers for the resolver API.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error};

use regiondex::batch::{refresh, RefreshMode, RefreshReport, UserLocation};
use regiondex::models::{GazetteerEntry, GeoBounds};
use regiondex::{RegionResolver, ResolvedAddress};

/// Application state shared across handlers
pub struct AppState {
    pub resolver: RegionResolver,
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid coordinate: latitude {lat}, longitude {lon}")]
    InvalidCoordinate { lat: f64, lon: f64 },

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::InvalidCoordinate { .. } => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub gazetteer: &'static str,
    pub entries: usize,
}

/// Health check endpoint
pub async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let gazetteer = state.resolver.gazetteer();
    Json(HealthResponse {
        status: "ok",
        gazetteer: gazetteer.name,
        entries: gazetteer.len(),
    })
}

#[derive(Deserialize)]
pub struct ReverseQueryParams {
    /// Point latitude
    #[serde(rename = "point.lat")]
    pub point_lat: f64,
    /// Point longitude
    #[serde(rename = "point.lon")]
    pub point_lon: f64,
}

#[derive(Serialize)]
pub struct ReverseResponse {
    pub label: String,
    pub address: ResolvedAddress,
}

/// Reverse geocoding
pub async fn reverse_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ReverseQueryParams>,
) -> Result<Json<ReverseResponse>, ApiError> {
    let (lat, lon) = (params.point_lat, params.point_lon);
    if !lat.is_finite() || !lon.is_finite() {
        return Err(ApiError::InvalidCoordinate { lat, lon });
    }

    let address = state.resolver.resolve(lat, lon);
    debug!("Reverse ({}, {}) -> {}", lat, lon, address);

    Ok(Json(ReverseResponse {
        label: address.label(),
        address,
    }))
}

#[derive(Serialize)]
pub struct GazetteerResponse {
    pub name: &'static str,
    pub bounds: GeoBounds,
    pub entries: &'static [GazetteerEntry],
}

/// List the reference points in use
pub async fn gazetteer_handler(State(state): State<Arc<AppState>>) -> Json<GazetteerResponse> {
    let gazetteer = state.resolver.gazetteer();
    Json(GazetteerResponse {
        name: gazetteer.name,
        bounds: gazetteer.bounds,
        entries: gazetteer.entries,
    })
}

#[derive(Deserialize)]
pub struct RefreshQueryParams {
    pub mode: Option<RefreshMode>,
}

/// Recompute addresses for a batch of user records
pub async fn refresh_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<RefreshQueryParams>,
    Json(records): Json<Vec<UserLocation>>,
) -> Result<Json<RefreshReport>, ApiError> {
    let resolver = state.resolver;
    let mode = params.mode.unwrap_or_default();

    let report = tokio::task::spawn_blocking(move || refresh(&resolver, records, mode))
        .await
        .map_err(|e| {
            error!("Address refresh failed: {}", e);
            ApiError::Internal(e.to_string())
        })?;

    Ok(Json(report))
}

//! Health check handlers

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

use crate::{error::Error, repository::TodoStore, state::AppState};

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service name
    pub service: String,

    /// Version
    pub version: String,
}

/// Readiness check response
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessResponse {
    /// Overall readiness status
    pub ready: bool,

    /// Service name
    pub service: String,

    /// Number of items currently held by the store
    pub items: u64,
}

/// Simple health check (liveness probe)
///
/// Always returns 200 OK if the service is running.
pub async fn health<S: TodoStore>(State(state): State<AppState<S>>) -> impl IntoResponse {
    let response = HealthResponse {
        status: "healthy".to_string(),
        service: state.config().service.name.clone(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}

/// Readiness check (readiness probe)
///
/// Ready once the store answers a count.
pub async fn readiness<S: TodoStore>(
    State(state): State<AppState<S>>,
) -> Result<Json<ReadinessResponse>, Error> {
    let items = state.store().count().await?;

    Ok(Json(ReadinessResponse {
        ready: true,
        service: state.config().service.name.clone(),
        items,
    }))
}

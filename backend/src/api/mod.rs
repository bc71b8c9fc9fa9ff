//! API route registration.

pub mod users;

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::Router;

use crate::errors::ApiError;
use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .with_state(state.clone())
        .merge(users::routes::router(state))
}

/// Liveness probe backed by a database round trip
async fn health(State(state): State<Arc<AppState>>) -> Result<&'static str, ApiError> {
    state
        .flathaus()
        .health_check()
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok("ok")
}

//! Handler functions for the user API endpoints.
//!
//! Serde rejects malformed or incomplete request bodies at the Json
//! extractor boundary; handlers only see validated schemas.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use crate::errors::ApiError;
use crate::models::{ItemRead, UserCreate, UserRead};
use crate::services::users;
use crate::state::AppState;

pub async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(user): Json<UserCreate>,
) -> Result<(StatusCode, Json<UserRead>), ApiError> {
    let created = users::create_user(&state, user).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<UserRead>, ApiError> {
    users::fetch_user(&state, id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("user"))
}

pub async fn list_user_items(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<ItemRead>>, ApiError> {
    if users::fetch_user(&state, id).await?.is_none() {
        return Err(ApiError::NotFound("user"));
    }

    let items = users::fetch_user_items(&state, id).await?;
    Ok(Json(items))
}

//! User creation and retrieval.
//!
//! Creation flattens the request once, persists the user row, then persists
//! each converted item record with its owner assigned.

use flathaus::prelude::*;
use tracing::info;

use crate::errors::ApiError;
use crate::models::{ItemRead, UserCreate, UserRead};
use crate::state::AppState;
use crate::tables;

pub async fn create_user(state: &AppState, user: UserCreate) -> Result<UserRead, ApiError> {
    let mut columns = flatten(&user, state.registry())?;

    // Converted item records leave the column map; they are rows of their
    // own table, not a column of users
    let items = columns.remove("items");

    let user_record = TableRecord::from_fields(&tables::USERS, columns)?;
    let user_id = state.store().insert(&user_record).await?;

    if let Some(Value::Array(item_values)) = items {
        for value in item_values {
            match value {
                Value::Record(record) => {
                    state
                        .store()
                        .insert_with(&record, &[("owner_id", Value::BigInt(user_id))])
                        .await?;
                }
                other => {
                    return Err(ApiError::Internal(format!(
                        "expected a converted item record, got {:?}",
                        other
                    )))
                }
            }
        }
    }

    info!(user_id, "created user");

    fetch_user(state, user_id)
        .await?
        .ok_or_else(|| ApiError::Internal("created user row missing".to_string()))
}

pub async fn fetch_user(state: &AppState, id: i64) -> Result<Option<UserRead>, ApiError> {
    let row = state.store().fetch_by_id(&tables::USERS, id).await?;

    match row {
        Some(row) => UserRead::from_row(&row)
            .map(Some)
            .ok_or_else(|| ApiError::Internal("users row has unexpected shape".to_string())),
        None => Ok(None),
    }
}

pub async fn fetch_user_items(state: &AppState, owner_id: i64) -> Result<Vec<ItemRead>, ApiError> {
    let rows = state
        .store()
        .fetch_by_column(&tables::ITEMS, "owner_id", &Value::BigInt(owner_id))
        .await?;

    rows.iter()
        .map(|row| {
            ItemRead::from_row(row)
                .ok_or_else(|| ApiError::Internal("items row has unexpected shape".to_string()))
        })
        .collect()
}

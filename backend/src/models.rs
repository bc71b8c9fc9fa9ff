//! Request and response schemas for the user API.
//!
//! Create schemas are validated at the JSON boundary by serde and converted
//! to records by the flattening core; read schemas shape the rows returned
//! to clients.

use flathaus::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Schema)]
pub struct ItemCreate {
    pub title: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Schema)]
pub struct UserCreate {
    pub username: String,
    pub password: String,
    #[serde(default)]
    #[field(nested_list)]
    pub items: Vec<ItemCreate>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserRead {
    pub id: i64,
    pub username: String,
    pub is_active: bool,
}

impl UserRead {
    /// Build from a fetched users row; None if the row shape is off
    pub fn from_row(row: &FieldMap) -> Option<Self> {
        Some(Self {
            id: row.get("id")?.as_i64()?,
            username: row.get("username")?.as_str()?.to_string(),
            is_active: row.get("is_active")?.as_bool()?,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ItemRead {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub owner_id: i64,
}

impl ItemRead {
    /// Build from a fetched items row; None if the row shape is off
    pub fn from_row(row: &FieldMap) -> Option<Self> {
        Some(Self {
            id: row.get("id")?.as_i64()?,
            title: row.get("title")?.as_str()?.to_string(),
            description: row
                .get("description")
                .and_then(|v| v.as_str())
                .map(ToString::to_string),
            owner_id: row.get("owner_id")?.as_i64()?,
        })
    }
}

//! Trait definitions
//!
//! This module defines the store seam the HTTP layer talks through.

use async_trait::async_trait;
use schema_core::{FieldMap, TableRecord, TableSpec, Value};

use crate::errors::StoreError;

/// Database operations over converted records
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Insert a record, returning the primary key the database assigned
    async fn insert(&self, record: &TableRecord) -> Result<i64, StoreError>;

    /// Insert a record together with extra columns the conversion could not
    /// know yet (foreign keys to rows created in the same request)
    async fn insert_with(
        &self,
        record: &TableRecord,
        extras: &[(&'static str, Value)],
    ) -> Result<i64, StoreError>;

    /// Fetch one row by primary key as a field map
    async fn fetch_by_id(
        &self,
        spec: &'static TableSpec,
        id: i64,
    ) -> Result<Option<FieldMap>, StoreError>;

    /// Fetch all rows matching one column value, ordered by primary key
    async fn fetch_by_column(
        &self,
        spec: &'static TableSpec,
        column: &'static str,
        value: &Value,
    ) -> Result<Vec<FieldMap>, StoreError>;
}

//! PostgreSQL record store
//!
//! Statements are generated from static table specs; values bind through
//! the `Value` enum, with the column's declared SQL type selecting the
//! parameter type for nulls and the decode type for fetches.

use async_trait::async_trait;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::Query;
use sqlx::{PgPool, Postgres, Row};
use tracing::debug;

use schema_core::{ColumnSpec, FieldMap, TableRecord, TableSpec, Value};

use crate::errors::StoreError;
use crate::sql;
use crate::traits::RecordStore;

#[derive(Clone)]
pub struct PgRecordStore {
    pool: PgPool,
}

impl PgRecordStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl std::fmt::Debug for PgRecordStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgRecordStore").finish()
    }
}

/// Decoded shape of a declared SQL column type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnKind {
    BigInt,
    Integer,
    Text,
    Boolean,
    Double,
    Uuid,
    Timestamp,
    Json,
}

fn column_kind(spec: &TableSpec, column: &ColumnSpec) -> Result<ColumnKind, StoreError> {
    match column.sql_type.to_ascii_uppercase().as_str() {
        "BIGSERIAL" | "BIGINT" => Ok(ColumnKind::BigInt),
        "SERIAL" | "INTEGER" | "INT" => Ok(ColumnKind::Integer),
        "TEXT" | "VARCHAR" => Ok(ColumnKind::Text),
        "BOOLEAN" | "BOOL" => Ok(ColumnKind::Boolean),
        "DOUBLE PRECISION" => Ok(ColumnKind::Double),
        "UUID" => Ok(ColumnKind::Uuid),
        "TIMESTAMPTZ" => Ok(ColumnKind::Timestamp),
        "JSON" | "JSONB" => Ok(ColumnKind::Json),
        _ => Err(StoreError::UnsupportedColumnType {
            table: spec.name,
            column: column.name,
            sql_type: column.sql_type,
        }),
    }
}

type PgQuery<'q> = Query<'q, Postgres, PgArguments>;

/// Bind one value; nulls bind with the column's declared parameter type
fn bind_value<'q>(
    query: PgQuery<'q>,
    spec: &'static TableSpec,
    name: &str,
    value: &Value,
) -> Result<PgQuery<'q>, StoreError> {
    let column = spec.column(name).ok_or_else(|| StoreError::UnknownColumn {
        table: spec.name,
        column: name.to_string(),
    })?;

    let query = match value {
        Value::Text(v) => query.bind(v.clone()),
        Value::Integer(v) => query.bind(*v),
        Value::BigInt(v) => query.bind(*v),
        Value::Float(v) => query.bind(*v),
        Value::Boolean(v) => query.bind(*v),
        Value::Uuid(v) => query.bind(*v),
        Value::Timestamp(v) => query.bind(*v),
        Value::Json(v) => query.bind(v.clone()),
        Value::Null => match column_kind(spec, column)? {
            ColumnKind::BigInt => query.bind(Option::<i64>::None),
            ColumnKind::Integer => query.bind(Option::<i32>::None),
            ColumnKind::Text => query.bind(Option::<String>::None),
            ColumnKind::Boolean => query.bind(Option::<bool>::None),
            ColumnKind::Double => query.bind(Option::<f64>::None),
            ColumnKind::Uuid => query.bind(Option::<uuid::Uuid>::None),
            ColumnKind::Timestamp => {
                query.bind(Option::<chrono::DateTime<chrono::Utc>>::None)
            }
            ColumnKind::Json => query.bind(Option::<serde_json::Value>::None),
        },
        Value::Array(_) | Value::Map(_) | Value::Record(_) => {
            return Err(StoreError::UnbindableValue {
                table: spec.name,
                column: name.to_string(),
            })
        }
    };

    Ok(query)
}

/// Decode one row into a field map using the spec's declared column types
fn decode_row(spec: &'static TableSpec, row: &PgRow) -> Result<FieldMap, StoreError> {
    let mut fields = FieldMap::new();

    for column in spec.columns {
        let value = match column_kind(spec, column)? {
            ColumnKind::BigInt => row
                .try_get::<Option<i64>, _>(column.name)
                .map(|v| v.map(Value::BigInt)),
            ColumnKind::Integer => row
                .try_get::<Option<i32>, _>(column.name)
                .map(|v| v.map(Value::Integer)),
            ColumnKind::Text => row
                .try_get::<Option<String>, _>(column.name)
                .map(|v| v.map(Value::Text)),
            ColumnKind::Boolean => row
                .try_get::<Option<bool>, _>(column.name)
                .map(|v| v.map(Value::Boolean)),
            ColumnKind::Double => row
                .try_get::<Option<f64>, _>(column.name)
                .map(|v| v.map(Value::Float)),
            ColumnKind::Uuid => row
                .try_get::<Option<uuid::Uuid>, _>(column.name)
                .map(|v| v.map(Value::Uuid)),
            ColumnKind::Timestamp => row
                .try_get::<Option<chrono::DateTime<chrono::Utc>>, _>(column.name)
                .map(|v| v.map(Value::Timestamp)),
            ColumnKind::Json => row
                .try_get::<Option<serde_json::Value>, _>(column.name)
                .map(|v| v.map(Value::Json)),
        }
        .map_err(|e| StoreError::decode(spec.name, column.name, e))?
        .unwrap_or(Value::Null);

        fields.insert(column.name.to_string(), value);
    }

    Ok(fields)
}

#[async_trait]
impl RecordStore for PgRecordStore {
    async fn insert(&self, record: &TableRecord) -> Result<i64, StoreError> {
        self.insert_with(record, &[]).await
    }

    async fn insert_with(
        &self,
        record: &TableRecord,
        extras: &[(&'static str, Value)],
    ) -> Result<i64, StoreError> {
        let spec = record.spec();
        let primary_key = spec
            .primary_key()
            .ok_or(StoreError::MissingPrimaryKey { table: spec.name })?;

        let columns = sql::insert_columns(record, extras);
        let statement = sql::insert_sql(spec, &columns)?;
        debug!(table = spec.name, "inserting record");

        let mut query = sqlx::query(&statement);
        for (name, value) in &columns {
            query = bind_value(query, spec, name, value)?;
        }

        let row = query
            .fetch_one(&self.pool)
            .await
            .map_err(|e| StoreError::query(spec.name, "insert", e))?;

        row.try_get::<i64, _>(0)
            .map_err(|e| StoreError::decode(spec.name, primary_key.name, e))
    }

    async fn fetch_by_id(
        &self,
        spec: &'static TableSpec,
        id: i64,
    ) -> Result<Option<FieldMap>, StoreError> {
        let statement = sql::select_by_id_sql(spec)?;
        debug!(table = spec.name, id, "fetching record by id");

        let row = sqlx::query(&statement)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StoreError::query(spec.name, "fetch_by_id", e))?;

        row.map(|row| decode_row(spec, &row)).transpose()
    }

    async fn fetch_by_column(
        &self,
        spec: &'static TableSpec,
        column: &'static str,
        value: &Value,
    ) -> Result<Vec<FieldMap>, StoreError> {
        let statement = sql::select_by_column_sql(spec, column)?;
        debug!(table = spec.name, column, "fetching records by column");

        let mut query = sqlx::query(&statement);
        query = bind_value(query, spec, column, value)?;

        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| StoreError::query(spec.name, "fetch_by_column", e))?;

        rows.iter().map(|row| decode_row(spec, row)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schema_core::ColumnSpec;

    static ITEMS: TableSpec = TableSpec::new(
        "items",
        &[
            ColumnSpec::new("id", "BIGSERIAL").primary_key(),
            ColumnSpec::new("title", "TEXT"),
            ColumnSpec::new("payload", "BYTEA"),
        ],
    );

    #[test]
    fn test_column_kind_mapping() {
        assert_eq!(
            column_kind(&ITEMS, ITEMS.column("id").unwrap()).unwrap(),
            ColumnKind::BigInt
        );
        assert_eq!(
            column_kind(&ITEMS, ITEMS.column("title").unwrap()).unwrap(),
            ColumnKind::Text
        );
    }

    #[test]
    fn test_unsupported_column_type() {
        let err = column_kind(&ITEMS, ITEMS.column("payload").unwrap()).unwrap_err();
        assert!(matches!(
            err,
            StoreError::UnsupportedColumnType {
                table: "items",
                column: "payload",
                sql_type: "BYTEA",
            }
        ));
    }
}

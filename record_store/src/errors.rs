//! Error types for the record store

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("query failed on table '{table}' during {operation}: {source}")]
    Query {
        table: &'static str,
        operation: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("table '{table}' declares no primary key column")]
    MissingPrimaryKey { table: &'static str },

    #[error("column '{column}' of table '{table}' holds a value that cannot be bound as a query parameter")]
    UnbindableValue {
        table: &'static str,
        column: String,
    },

    #[error("table '{table}' declares no column named '{column}'")]
    UnknownColumn {
        table: &'static str,
        column: String,
    },

    #[error("column '{column}' of table '{table}' has unsupported SQL type '{sql_type}'")]
    UnsupportedColumnType {
        table: &'static str,
        column: &'static str,
        sql_type: &'static str,
    },

    #[error("failed to decode column '{column}' of table '{table}': {source}")]
    Decode {
        table: &'static str,
        column: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

impl StoreError {
    pub fn query(table: &'static str, operation: &'static str, source: sqlx::Error) -> Self {
        StoreError::Query {
            table,
            operation,
            source,
        }
    }

    pub fn decode(table: &'static str, column: &'static str, source: sqlx::Error) -> Self {
        StoreError::Decode {
            table,
            column,
            source,
        }
    }
}

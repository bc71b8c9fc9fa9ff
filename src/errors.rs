//! Error types for the flathaus crate
//!
//! Registration-time configuration failures and conversion-time failures
//! are kept separate: the former surface once at startup, the latter flow
//! through request handling.

use schema_core::{IdentifierError, RecordError};
use thiserror::Error;

/// Configuration errors surfaced while building or validating the registry
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Schema already registered: {0}")]
    SchemaAlreadyRegistered(&'static str),

    #[error("Record mapping already declared for schema: {0}")]
    RecordAlreadyMapped(&'static str),

    #[error("Schema not registered: {0}")]
    UnregisteredSchema(&'static str),

    #[error(
        "Field '{field}' of schema '{schema}' nests schema '{nested}', which has no record mapping"
    )]
    MissingRecordMapping {
        schema: &'static str,
        field: &'static str,
        nested: &'static str,
    },

    #[error("Field '{field}' of schema '{schema}' does not match a column of table '{table}'")]
    UnknownColumn {
        schema: &'static str,
        field: &'static str,
        table: &'static str,
    },

    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(#[from] IdentifierError),
}

/// Errors raised while flattening a schema instance into records
#[derive(Error, Debug)]
pub enum FlattenError {
    /// Backstop for registries used without a prior `validate()` call;
    /// a validated registry cannot produce this
    #[error("No record mapping declared for nested schema: {0}")]
    MissingRecordMapping(&'static str),

    #[error(transparent)]
    Record(#[from] RecordError),
}

/// Coordinator-level failures
#[derive(Error, Debug)]
pub enum FlathausError {
    #[error("Database connection error: {0}")]
    DatabaseConnection(#[from] sqlx::Error),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(#[from] IdentifierError),
}

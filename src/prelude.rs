//! Convenience re-exports for common flathaus usage
//!
//! This prelude module re-exports the most commonly used items from the
//! flathaus ecosystem, making it easier to import everything you need with
//! a single use statement.
//!
//! # Example
//!
//! ```rust
//! use flathaus::prelude::*;
//! ```

// Core flathaus components
pub use crate::core::Flathaus;
pub use crate::errors::{FlathausError, FlattenError, RegistryError};
pub use crate::flatten::flatten;
pub use crate::registry::SchemaRegistry;

// Re-export centralized config
pub use config::{AppConfig, ConfigError, DatabaseConfig, ServerConfig};

// Re-export the schema data model for convenience
pub use schema_core::{
    ColumnSpec, DumpedField, FieldDescriptor, FieldKind, FieldMap, IdentifierError, RecordError,
    Schema, SchemaDescriptor, SchemaDump, TableRecord, TableSpec, Value,
};

// Re-export schema_core module for macro-generated code
pub use schema_core;

// Re-export the persistence layer
pub use record_store::{PgRecordStore, RecordStore, StoreError};

// Re-export the derive for schema declaration
pub use schema_derive::Schema;

// Common external dependencies
pub use anyhow;
pub use async_trait;
pub use sqlx;
pub use tokio;

// Commonly used sqlx types
pub use sqlx::PgPool;

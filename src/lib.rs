//! # flathaus
//!
//! A small PostgreSQL-backed web service core: validated request schemas
//! declare their nested structure statically, a startup-validated registry
//! maps nested schema types to persistable record tables, and `flatten`
//! converts a request into a flat column map ready for persistence.
//!
//! ## Quick Start
//!
//! ```rust
//! use flathaus::prelude::*;
//!
//! #[derive(Debug, Clone, Schema)]
//! pub struct ItemCreate {
//!     pub title: String,
//!     pub description: Option<String>,
//! }
//!
//! #[derive(Debug, Clone, Schema)]
//! pub struct UserCreate {
//!     pub username: String,
//!     pub password: String,
//!     #[field(nested_list)]
//!     pub items: Vec<ItemCreate>,
//! }
//!
//! static ITEMS_TABLE: TableSpec = TableSpec::new(
//!     "items",
//!     &[
//!         ColumnSpec::new("id", "BIGSERIAL").primary_key(),
//!         ColumnSpec::new("title", "TEXT"),
//!         ColumnSpec::new("description", "TEXT").nullable(),
//!         ColumnSpec::new("owner_id", "BIGINT").nullable(),
//!     ],
//! );
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut registry = SchemaRegistry::new();
//!     registry.register::<ItemCreate>()?;
//!     registry.register::<UserCreate>()?;
//!     registry.map_record::<ItemCreate>(&ITEMS_TABLE)?;
//!     registry.validate()?;
//!
//!     let user = UserCreate {
//!         username: "alice".to_string(),
//!         password: "x".to_string(),
//!         items: vec![],
//!     };
//!     let columns = flatten(&user, &registry)?;
//!     assert_eq!(columns.len(), 3);
//!     Ok(())
//! }
//! ```

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod core;
pub mod errors;
pub mod flatten;
pub mod prelude;
pub mod registry;

// Re-export the main public types for convenience
pub use self::core::Flathaus;
pub use errors::{FlathausError, FlattenError, RegistryError};
pub use flatten::flatten;
pub use registry::SchemaRegistry;

// Re-export centralized config
pub use config::{AppConfig, ConfigError, DatabaseConfig, ServerConfig};

// Re-export internal crates used by macros and public API
// These MUST be public for the generated macro code to work correctly
pub use record_store;
pub use schema_core;
pub use schema_derive;

// Re-export external dependencies used in public API
pub use async_trait;
pub use sqlx;

//! Core flathaus functionality
//!
//! This module contains the Flathaus coordinator, which owns the database
//! pool, bootstraps the declared tables, and carries the validated schema
//! registry shared with request handlers.

use std::time::Duration;

use config::DatabaseConfig;
use schema_core::{validate_identifier, TableSpec};
use sqlx::PgPool;

use crate::debug_log;
use crate::errors::FlathausError;
use crate::registry::SchemaRegistry;

/// Coordinator that ties the database pool to the validated registry
pub struct Flathaus {
    pool: PgPool,
    registry: SchemaRegistry,
}

impl Flathaus {
    /// Connect to the database and take ownership of the registry.
    ///
    /// The registry is validated here so configuration gaps abort startup
    /// instead of surfacing during request handling.
    pub async fn new(
        config: DatabaseConfig,
        registry: SchemaRegistry,
    ) -> Result<Self, FlathausError> {
        registry.validate()?;

        let connection_string = config.connection_string();

        let mut pool_options = sqlx::postgres::PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .idle_timeout(Duration::from_secs(config.idle_timeout_seconds));

        // Set max lifetime if specified
        if config.max_lifetime_seconds > 0 {
            pool_options =
                pool_options.max_lifetime(Duration::from_secs(config.max_lifetime_seconds));
        }

        let pool = pool_options.connect(&connection_string).await?;

        Ok(Self { pool, registry })
    }

    /// Get database pool reference
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the validated schema registry
    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    /// Create declared tables and their indexes if they do not exist yet
    pub async fn ensure_tables(&self, specs: &[&'static TableSpec]) -> Result<(), FlathausError> {
        for spec in specs {
            validate_identifier(spec.name)?;
            for column in spec.columns {
                validate_identifier(column.name)?;
            }

            let create_sql = spec.create_table_sql();
            debug_log!("ensuring table with SQL: {}", create_sql);
            sqlx::query(&create_sql).execute(&self.pool).await?;

            for index_sql in spec.create_indexes_sql() {
                debug_log!("ensuring index with SQL: {}", index_sql);
                sqlx::query(&index_sql).execute(&self.pool).await?;
            }
        }

        Ok(())
    }

    /// Check database connection health
    pub async fn health_check(&self) -> Result<(), FlathausError> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }
}

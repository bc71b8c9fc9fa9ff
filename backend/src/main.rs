//! Main entry point for the flathaus backend.
//!
//! This file initializes the axum web server, connects the database pool,
//! registers the request schemas and their record mappings, and serves the
//! user API.

mod api;
mod errors;
mod models;
mod services;
mod state;
mod tables;

use std::net::SocketAddr;
use std::sync::Arc;

use flathaus::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::models::{ItemCreate, UserCreate};
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::load()?;

    // The declared mapping table: built once, validated before serving
    let mut registry = SchemaRegistry::new();
    registry.register::<ItemCreate>()?;
    registry.register::<UserCreate>()?;
    registry.map_record::<ItemCreate>(&tables::ITEMS)?;
    registry.validate()?;

    let flathaus = Flathaus::new(config.database.clone(), registry).await?;
    flathaus
        .ensure_tables(&[&tables::USERS, &tables::ITEMS])
        .await?;

    let state = Arc::new(AppState::new(flathaus));
    let app = api::router(state);

    let addr: SocketAddr = config.server.bind_address().parse()?;
    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}

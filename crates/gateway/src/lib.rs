//! HTTP API for employees, departments and user accounts.
//!
//! Axum handlers sit on top of the application use cases, which run over the
//! SeaORM persistence layer and the Argon2/JWT security services.

pub mod adapters;
pub mod commands;
pub mod config;
pub mod container;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use common::AppError;
use infrastructure::{Argon2PasswordHasher, Database, JwtTokenProvider, Persistence};

use crate::config::ApiConfig;
use crate::container::Interactors;
use crate::routes::create_router;
use crate::state::AppState;

/// Run the HTTP server with the given configuration.
pub async fn run_server(
    host: &str,
    port: u16,
    config: ApiConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    config.validate()?;

    let database = Database::connect(&config.database)
        .await
        .map_err(|e| AppError::internal_with("Database connection failed", e))?;

    let tokens = Arc::new(JwtTokenProvider::new(config.jwt.clone()));
    let use_cases = Arc::new(Interactors::new(
        Persistence::new(database.get_connection()),
        Arc::new(Argon2PasswordHasher::new()),
        tokens.clone(),
    ));

    let state = AppState::new(use_cases, tokens, database);

    let app = create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Employee API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

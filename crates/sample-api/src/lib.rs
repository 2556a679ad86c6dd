//! Product catalog API.
//!
//! Handlers return `outcome` result types directly; the status of each result
//! picks the HTTP status code and panics are turned into `Failure` responses.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod routes;
pub mod services;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::config::ApiConfig;
use crate::routes::create_router;
use crate::services::InMemoryProductService;
use crate::state::AppState;

/// Errors that stop the server.
#[derive(Error, Debug)]
pub enum ServeError {
    #[error("Invalid listen address: {0}")]
    Address(#[from] std::net::AddrParseError),

    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Run the HTTP server with the given configuration.
pub async fn run_server(config: ApiConfig) -> Result<(), ServeError> {
    let addr: SocketAddr = config.bind_address().parse()?;
    let environment = config.http.environment;

    let state = AppState::new(Arc::new(InMemoryProductService::new()), config);
    let app = create_router(state);

    info!(?environment, "API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

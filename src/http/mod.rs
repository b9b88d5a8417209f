//! HTTP surface: router, handlers, and the serve loop.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

use crate::config::CliConfig;
use crate::core::{Catalog, EnrollmentStore};

pub mod handlers;

/// Shared request-handling state. The catalog is read-only; the store is
/// the single mutable component and guards itself.
#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub store: Arc<EnrollmentStore>,
}

impl AppState {
    pub fn new(catalog: Catalog, store: EnrollmentStore) -> Self {
        Self {
            catalog: Arc::new(catalog),
            store: Arc::new(store),
        }
    }
}

/// Builds the application router. Separate from [`run_server`] so tests
/// can stand up the full route table against a fresh state.
pub fn app(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/", get(handlers::service_descriptor))
        .route("/cursos", get(handlers::list_courses))
        .route("/matricula", post(handlers::create_enrollment))
        .fallback(handlers::not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub fn cors_layer(origins: &[String]) -> Result<CorsLayer> {
    let origins = origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("invalid CORS origin: {origin}"))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]))
}

/// Binds the listener and serves until the process is stopped.
pub async fn run_server(config: &CliConfig) -> Result<()> {
    let state = AppState::new(Catalog::builtin(), EnrollmentStore::new());
    let app = app(state, cors_layer(&config.cors_origins)?);

    let addr: SocketAddr = format!("{}:{}", config.bind, config.port)
        .parse()
        .with_context(|| format!("invalid bind address {}:{}", config.bind, config.port))?;

    let listener = TcpListener::bind(addr).await?;
    info!("API rodando em http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}

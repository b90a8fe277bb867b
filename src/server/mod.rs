//! HTTP server for the site backend.
//!
//! This module provides an axum-based server with the site's small API and,
//! optionally, the built front-end assets.
//!
//! # Routes
//!
//! - `GET /api/ping`: liveness check returning the configured ping message
//! - `POST /api/contact`: contact relay (`OPTIONS` answers CORS preflight)
//! - `/api/*`: JSON 404
//! - everything else: files from the static directory, if configured

mod routes;

use crate::config::SiteConfig;
use crate::contact::ContactService;
use axum::{routing::any, routing::get, Router};
use std::path::Path;
use std::sync::Arc;
use tower_http::services::ServeDir;

/// State shared across handlers.
#[derive(Debug)]
pub struct AppState {
    /// Contact relay
    pub contact: ContactService,
    /// Body of the ping endpoint
    pub ping_message: String,
}

impl AppState {
    /// Create state from its parts.
    pub fn new(contact: ContactService, ping_message: impl Into<String>) -> Self {
        Self {
            contact,
            ping_message: ping_message.into(),
        }
    }

    /// Create state from site configuration.
    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(
            ContactService::from_config(config.mail.clone()),
            config.ping_message.clone(),
        )
    }
}

/// Build the site router.
pub fn site_router(state: Arc<AppState>, static_dir: Option<&Path>) -> Router {
    let router = Router::new()
        .route("/api/ping", get(routes::ping))
        .route("/api/contact", any(routes::contact))
        .route("/api", any(routes::api_not_found))
        .route("/api/{*rest}", any(routes::api_not_found))
        .with_state(state);

    match static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router.fallback(routes::not_found),
    }
}

/// Bind to the configured address and serve until the process exits.
pub async fn serve(config: SiteConfig) -> std::io::Result<()> {
    let state = Arc::new(AppState::from_config(&config));
    let app = site_router(state, config.static_dir.as_deref());

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    log::info!("Site server listening on http://{}", addr);
    if let Some(dir) = &config.static_dir {
        log::info!("Serving static assets from {}", dir.display());
    }

    axum::serve(listener, app).await
}

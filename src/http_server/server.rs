//! # HTTP Server
//!
//! Router assembly and startup: product and category routes, CORS from
//! configuration, request tracing, and the static admin page as the
//! fallback service.

use std::sync::Arc;

use axum::Router;
use sqlx::SqlitePool;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

use super::category_routes::category_routes;
use super::product_routes::product_routes;

/// State shared across handlers: the connection pool. Entity accessors are
/// built per request on top of it.
pub struct AppState {
    pub pool: SqlitePool,
}

/// HTTP server for the admin API
pub struct HttpServer {
    config: ServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server from configuration and a live pool
    pub fn new(config: ServerConfig, pool: SqlitePool) -> Self {
        let router = Self::build_router(&config, pool);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &ServerConfig, pool: SqlitePool) -> Router {
        let state = Arc::new(AppState { pool });

        // Configure CORS from config
        let cors = if config.cors_origins.is_empty() {
            // If no origins configured, use permissive for development
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            // Use configured origins for production
            use tower_http::cors::AllowOrigin;
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(product_routes(state.clone()))
            .merge(category_routes(state))
            // Admin page and its script
            .fallback_service(ServeDir::new(&config.static_dir))
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr = self.config.socket_addr();
        let listener = TcpListener::bind(&addr).await?;
        tracing::info!(%addr, "stockroom listening");
        axum::serve(listener, self.router).await
    }
}

#![forbid(unsafe_code)]
//! HTTP surface over the compiled-in academy catalog. All state is the
//! immutable catalog plus per-process counters; no handler blocks on I/O
//! beyond the socket.

use aljude_academy_model::Catalog;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use std::sync::atomic::{AtomicBool, AtomicU64};
use std::sync::Arc;

mod config;
mod handlers;
mod metrics;

pub use config::ServerConfig;

pub const CRATE_NAME: &str = "aljude-academy-server";

#[derive(Clone)]
pub struct AppState {
    pub catalog: &'static Catalog,
    pub config: ServerConfig,
    pub ready: Arc<AtomicBool>,
    pub(crate) metrics: Arc<metrics::RequestMetrics>,
    pub(crate) request_id_seed: Arc<AtomicU64>,
}

impl AppState {
    #[must_use]
    pub fn new(catalog: &'static Catalog) -> Self {
        Self::with_config(catalog, ServerConfig::default())
    }

    #[must_use]
    pub fn with_config(catalog: &'static Catalog, config: ServerConfig) -> Self {
        Self {
            catalog,
            config,
            ready: Arc::new(AtomicBool::new(true)),
            metrics: Arc::new(metrics::RequestMetrics::default()),
            request_id_seed: Arc::new(AtomicU64::new(1)),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.request_body_limit_bytes;
    Router::new()
        .route("/healthz", get(handlers::healthz_handler))
        .route("/readyz", get(handlers::readyz_handler))
        .route("/metrics", get(handlers::metrics_handler))
        .route("/v1/version", get(handlers::version_handler))
        .route("/v1/openapi.json", get(handlers::openapi_handler))
        .route("/v1/categories", get(handlers::categories_handler))
        .route("/v1/categories/:slug", get(handlers::category_handler))
        .route("/v1/capabilities/:cap", get(handlers::capability_handler))
        .route(
            "/v1/capabilities/:cap/:sub",
            get(handlers::sub_capability_handler),
        )
        .route("/v1/search", get(handlers::search_handler))
        .route("/v1/routes", get(handlers::routes_handler))
        .route("/v1/keywords", get(handlers::keywords_handler))
        .route(
            "/v1/assessments/:cap/:sub/score",
            post(handlers::score_handler),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::{forts, handlers, planner, search};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    // API routes
    let api_routes = Router::new()
        // Health, config, metrics
        .route("/health", get(handlers::health))
        .route("/config", get(handlers::get_config))
        .route("/metrics", get(handlers::metrics))
        // Fort catalog
        .route("/forts", get(forts::list_forts))
        .route("/forts/regions", get(forts::list_regions))
        .route("/forts/stats", get(forts::get_stats))
        .route("/forts/{id}", get(forts::get_fort))
        // Smart search (relevance service with local fallback)
        .route("/search", post(search::search))
        // Trip planner
        .route("/planner/estimate", post(planner::estimate))
        .with_state(state);

    // The frontend is a separate static site, so CORS stays permissive.
    Router::new()
        .nest("/api/v1", api_routes)
        .layer(middleware::from_fn(super::middleware::metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

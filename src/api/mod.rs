use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::search_client::SearchClient;

pub mod handlers;
pub mod models;

pub fn create_router(search_client: Arc<SearchClient>) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // UI routes
        .route("/", get(handlers::index_handler))
        .route("/search", get(handlers::search_page_handler))
        // API routes
        .route("/double-search/", post(handlers::double_search_handler))
        .route("/api/search", post(handlers::search_handler))
        .route("/openapi.json", get(handlers::openapi_handler))
        .route("/health", get(handlers::health_handler))
        .with_state(search_client)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::handlers::{
    create_content, create_content_type, delete_content, delete_content_type, get_content,
    get_content_type, healthcheck, index, list_articles, list_content_types, list_contents,
    update_content, update_content_type,
};
use crate::ports::services::ContentService;

/// Application state shared by all handlers. The pool is present only when
/// the relational backend is configured; the healthcheck uses it to probe the
/// database.
#[derive(Clone)]
pub struct AppState {
    pub content_service: Arc<dyn ContentService>,
    pub db_pool: Option<PgPool>,
}

/// Create the main application router with all endpoints
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/healthcheck", get(healthcheck))
        // Content aggregate
        .route("/contents", get(list_contents))
        .route("/contents", post(create_content))
        .route("/contents/{id}", get(get_content))
        .route("/contents/{id}", put(update_content))
        .route("/contents/{id}", delete(delete_content))
        // Content types
        .route("/content-types", get(list_content_types))
        .route("/content-types", post(create_content_type))
        .route("/content-types/{id}", get(get_content_type))
        .route("/content-types/{id}", put(update_content_type))
        .route("/content-types/{id}", delete(delete_content_type))
        // Key-value article variant
        .route("/articles", get(list_articles))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

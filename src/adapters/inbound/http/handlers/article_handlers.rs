use axum::{Json, extract::State, http::StatusCode};

use crate::adapters::inbound::http::{
    dto::{ArticleDto, ErrorResponseDto},
    router::AppState,
};

use super::content_handlers::internal_error;
use super::request_context;

/// Handle article listing from the key-value backend
pub async fn list_articles(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<ArticleDto>>, (StatusCode, Json<ErrorResponseDto>)> {
    let ctx = request_context();
    let articles = app_state
        .content_service
        .list_articles(&ctx)
        .await
        .map_err(internal_error)?;

    Ok(Json(articles.into_iter().map(ArticleDto::from).collect()))
}

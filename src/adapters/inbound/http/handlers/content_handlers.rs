use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::adapters::inbound::http::{
    dto::{
        ContentDto, CreateContentDto, ErrorResponseDto, ListContentsParams,
        ListContentsResponseDto, SuccessResponseDto, UpdateContentDto,
    },
    router::AppState,
};

use super::request_context;

type ErrorReply = (StatusCode, Json<ErrorResponseDto>);

/// All service failures surface as one opaque status; the body carries the
/// error text for diagnosis.
pub(super) fn internal_error(e: impl std::fmt::Display) -> ErrorReply {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponseDto::new(e.to_string())),
    )
}

/// Handle the root listing: every content item as a bare JSON array, no
/// pagination envelope.
pub async fn index(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<ContentDto>>, ErrorReply> {
    let ctx = request_context();
    let page = app_state
        .content_service
        .list_contents(&ctx, &Default::default())
        .await
        .map_err(internal_error)?;

    Ok(Json(
        page.contents.into_iter().map(ContentDto::from).collect(),
    ))
}

/// Handle content listing with filter, sort and pagination parameters
pub async fn list_contents(
    State(app_state): State<AppState>,
    Query(params): Query<ListContentsParams>,
) -> Result<Json<ListContentsResponseDto>, ErrorReply> {
    let ctx = request_context();
    let page = app_state
        .content_service
        .list_contents(&ctx, &params.into_query())
        .await
        .map_err(internal_error)?;

    Ok(Json(ListContentsResponseDto {
        contents: page.contents.into_iter().map(ContentDto::from).collect(),
        total_count: page.total_count,
    }))
}

/// Handle retrieval of one content item with its full block graph
pub async fn get_content(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ContentDto>, ErrorReply> {
    let ctx = request_context();
    let content = app_state
        .content_service
        .get_content(&ctx, id)
        .await
        .map_err(internal_error)?;

    Ok(Json(ContentDto::from(content)))
}

/// Handle content creation
pub async fn create_content(
    State(app_state): State<AppState>,
    Json(dto): Json<CreateContentDto>,
) -> Result<(StatusCode, Json<ContentDto>), ErrorReply> {
    let ctx = request_context();
    let created = app_state
        .content_service
        .create_content(&ctx, dto.into_entity())
        .await
        .map_err(internal_error)?;

    Ok((StatusCode::CREATED, Json(ContentDto::from(created))))
}

/// Handle content replacement
pub async fn update_content(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(dto): Json<UpdateContentDto>,
) -> Result<Json<SuccessResponseDto>, ErrorReply> {
    let ctx = request_context();
    app_state
        .content_service
        .update_content(&ctx, dto.into_entity(id))
        .await
        .map_err(internal_error)?;

    Ok(Json(SuccessResponseDto::new("Content updated successfully")))
}

/// Handle content deletion
pub async fn delete_content(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SuccessResponseDto>, ErrorReply> {
    let ctx = request_context();
    app_state
        .content_service
        .delete_content(&ctx, id)
        .await
        .map_err(internal_error)?;

    Ok(Json(SuccessResponseDto::new("Content deleted successfully")))
}

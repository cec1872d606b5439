use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::adapters::inbound::http::{
    dto::{
        ContentTypeDto, CreateContentTypeDto, ErrorResponseDto, ListContentTypesParams,
        SuccessResponseDto, UpdateContentTypeDto,
    },
    router::AppState,
};

use super::content_handlers::internal_error;
use super::request_context;

type ErrorReply = (StatusCode, Json<ErrorResponseDto>);

/// Handle content type listing
pub async fn list_content_types(
    State(app_state): State<AppState>,
    Query(params): Query<ListContentTypesParams>,
) -> Result<Json<Vec<ContentTypeDto>>, ErrorReply> {
    let ctx = request_context();
    let content_types = app_state
        .content_service
        .list_content_types(&ctx, params.active_only)
        .await
        .map_err(internal_error)?;

    Ok(Json(
        content_types.into_iter().map(ContentTypeDto::from).collect(),
    ))
}

/// Handle retrieval of one content type
pub async fn get_content_type(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ContentTypeDto>, ErrorReply> {
    let ctx = request_context();
    let content_type = app_state
        .content_service
        .get_content_type(&ctx, id)
        .await
        .map_err(internal_error)?;

    Ok(Json(ContentTypeDto::from(content_type)))
}

/// Handle content type creation
pub async fn create_content_type(
    State(app_state): State<AppState>,
    Json(dto): Json<CreateContentTypeDto>,
) -> Result<(StatusCode, Json<ContentTypeDto>), ErrorReply> {
    let ctx = request_context();
    let created = app_state
        .content_service
        .create_content_type(&ctx, dto.into_entity())
        .await
        .map_err(internal_error)?;

    Ok((StatusCode::CREATED, Json(ContentTypeDto::from(created))))
}

/// Handle content type replacement
pub async fn update_content_type(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(dto): Json<UpdateContentTypeDto>,
) -> Result<Json<SuccessResponseDto>, ErrorReply> {
    let ctx = request_context();
    app_state
        .content_service
        .update_content_type(&ctx, dto.into_entity(id))
        .await
        .map_err(internal_error)?;

    Ok(Json(SuccessResponseDto::new(
        "Content type updated successfully",
    )))
}

/// Handle content type deletion
pub async fn delete_content_type(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SuccessResponseDto>, ErrorReply> {
    let ctx = request_context();
    app_state
        .content_service
        .delete_content_type(&ctx, id)
        .await
        .map_err(internal_error)?;

    Ok(Json(SuccessResponseDto::new(
        "Content type deleted successfully",
    )))
}

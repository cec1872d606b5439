use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;
use std::time::Duration;

use crate::adapters::inbound::http::router::AppState;

const DATABASE_PROBE_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Debug, Serialize)]
pub struct HealthResponseDto {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<DatabaseHealthDto>,
}

#[derive(Debug, Serialize)]
pub struct DatabaseHealthDto {
    pub status: &'static str,
    pub message: String,
}

/// Handle the healthcheck probe.
///
/// When a relational pool is configured the probe runs a bounded query
/// against it and the overall status follows the database status. Without a
/// pool there is nothing to check and the service reports healthy.
pub async fn healthcheck(
    State(app_state): State<AppState>,
) -> (StatusCode, Json<HealthResponseDto>) {
    let Some(pool) = &app_state.db_pool else {
        return (
            StatusCode::OK,
            Json(HealthResponseDto {
                status: "ok",
                database: None,
            }),
        );
    };

    let probe = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM content_types WHERE is_active = TRUE",
    )
    .fetch_one(pool);

    match tokio::time::timeout(DATABASE_PROBE_TIMEOUT, probe).await {
        Ok(Ok(count)) => (
            StatusCode::OK,
            Json(HealthResponseDto {
                status: "OK",
                database: Some(DatabaseHealthDto {
                    status: "OK",
                    message: format!("{} active content types", count),
                }),
            }),
        ),
        Ok(Err(e)) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthResponseDto {
                status: "ERROR",
                database: Some(DatabaseHealthDto {
                    status: "ERROR",
                    message: e.to_string(),
                }),
            }),
        ),
        Err(_) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthResponseDto {
                status: "ERROR",
                database: Some(DatabaseHealthDto {
                    status: "ERROR",
                    message: "Database probe timed out".to_string(),
                }),
            }),
        ),
    }
}

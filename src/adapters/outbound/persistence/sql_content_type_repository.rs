use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    adapters::outbound::persistence::models::ContentTypeRow,
    domain::{
        context::RequestContext,
        entities::ContentType,
        errors::{RepositoryError, RepositoryResult},
    },
    ports::repositories::ContentTypeRepository,
};

/// PostgreSQL implementation of ContentTypeRepository.
#[derive(Clone)]
pub struct SqlContentTypeRepository {
    pool: PgPool,
}

impl SqlContentTypeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn storage_error(context: &str, e: sqlx::Error) -> RepositoryError {
    RepositoryError::Storage {
        message: format!("Database error {}: {}", context, e),
        source: Some(e.to_string()),
    }
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(db) if db.is_unique_violation())
}

const SELECT_COLUMNS: &str = "id, name, display_name, description, icon, is_active, \
                              created_at, updated_at, created_by";

#[async_trait]
impl ContentTypeRepository for SqlContentTypeRepository {
    async fn get_by_id(&self, ctx: &RequestContext, id: Uuid) -> RepositoryResult<ContentType> {
        ctx.ensure_active()?;

        let row: ContentTypeRow = sqlx::query_as(&format!(
            "SELECT {} FROM content_types WHERE id = $1",
            SELECT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| storage_error("fetching content type", e))?
        .ok_or_else(|| RepositoryError::not_found("ContentType", id))?;

        Ok(row.to_entity())
    }

    async fn list(
        &self,
        ctx: &RequestContext,
        active_only: bool,
    ) -> RepositoryResult<Vec<ContentType>> {
        ctx.ensure_active()?;

        let sql = if active_only {
            format!(
                "SELECT {} FROM content_types WHERE is_active = TRUE ORDER BY name",
                SELECT_COLUMNS
            )
        } else {
            format!("SELECT {} FROM content_types ORDER BY name", SELECT_COLUMNS)
        };

        let rows: Vec<ContentTypeRow> = sqlx::query_as(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| storage_error("listing content types", e))?;

        Ok(rows.iter().map(|row| row.to_entity()).collect())
    }

    async fn create(
        &self,
        ctx: &RequestContext,
        content_type: ContentType,
    ) -> RepositoryResult<ContentType> {
        content_type.validate()?;
        ctx.ensure_active()?;

        let mut content_type = content_type;
        if content_type.id.is_nil() {
            content_type.id = Uuid::new_v4();
        }
        let now = Utc::now();
        content_type.created_at = now;
        content_type.updated_at = now;

        let row = ContentTypeRow::from_entity(&content_type);
        sqlx::query(
            r#"
            INSERT INTO content_types (
                id, name, display_name, description, icon, is_active,
                created_at, updated_at, created_by
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(row.id)
        .bind(&row.name)
        .bind(&row.display_name)
        .bind(&row.description)
        .bind(&row.icon)
        .bind(row.is_active)
        .bind(row.created_at)
        .bind(row.updated_at)
        .bind(&row.created_by)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                RepositoryError::Conflict {
                    entity: "ContentType",
                    field: "name",
                    value: content_type.name.clone(),
                }
            } else {
                storage_error("inserting content type", e)
            }
        })?;

        Ok(content_type)
    }

    async fn update(
        &self,
        ctx: &RequestContext,
        content_type: ContentType,
    ) -> RepositoryResult<()> {
        content_type.validate()?;
        ctx.ensure_active()?;

        let mut content_type = content_type;
        content_type.updated_at = Utc::now();

        let row = ContentTypeRow::from_entity(&content_type);
        let result = sqlx::query(
            r#"
            UPDATE content_types
            SET name = $2, display_name = $3, description = $4, icon = $5,
                is_active = $6, updated_at = $7, created_by = $8
            WHERE id = $1
            "#,
        )
        .bind(row.id)
        .bind(&row.name)
        .bind(&row.display_name)
        .bind(&row.description)
        .bind(&row.icon)
        .bind(row.is_active)
        .bind(row.updated_at)
        .bind(&row.created_by)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                RepositoryError::Conflict {
                    entity: "ContentType",
                    field: "name",
                    value: content_type.name.clone(),
                }
            } else {
                storage_error("updating content type", e)
            }
        })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found("ContentType", content_type.id));
        }

        Ok(())
    }

    async fn delete(&self, ctx: &RequestContext, id: Uuid) -> RepositoryResult<()> {
        ctx.ensure_active()?;

        let result = sqlx::query("DELETE FROM content_types WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("deleting content type", e))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found("ContentType", id));
        }

        Ok(())
    }
}

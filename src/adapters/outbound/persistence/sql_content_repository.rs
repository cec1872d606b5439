use async_trait::async_trait;
use chrono::Utc;
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::{
    adapters::outbound::persistence::models::{
        assemble_content, ContentBlockDataRow, ContentBlockRow, ContentRow, ContentTypeRow,
    },
    domain::{
        context::RequestContext,
        entities::Content,
        errors::{RepositoryError, RepositoryResult},
    },
    ports::repositories::{ContentPage, ContentQuery, ContentRepository, SortField},
};

/// PostgreSQL implementation of ContentRepository using sqlx.
///
/// Multi-row aggregate writes and the cascade delete run inside one database
/// transaction; dropping the transaction on an early error rolls everything
/// back.
#[derive(Clone)]
pub struct SqlContentRepository {
    pool: PgPool,
}

impl SqlContentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Initialize the full relational schema. Order matters: contents
    /// references content_types, blocks reference contents, data references
    /// blocks.
    pub async fn migrate(&self) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS content_types (
                id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                name VARCHAR(100) NOT NULL UNIQUE,
                display_name VARCHAR(255) NOT NULL,
                description TEXT NOT NULL DEFAULT '',
                icon VARCHAR(255) NOT NULL DEFAULT '',
                is_active BOOLEAN NOT NULL DEFAULT TRUE,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                created_by VARCHAR(255) NOT NULL
            );

            CREATE TABLE IF NOT EXISTS contents (
                id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                content_type_id UUID NOT NULL REFERENCES content_types(id),
                title VARCHAR(255) NOT NULL,
                slug VARCHAR(255) NOT NULL UNIQUE,
                status VARCHAR(20) NOT NULL DEFAULT 'draft',
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                published_at TIMESTAMPTZ,
                author_id VARCHAR(255) NOT NULL,
                version INTEGER NOT NULL DEFAULT 1
            );

            CREATE TABLE IF NOT EXISTS content_blocks (
                id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                content_id UUID NOT NULL REFERENCES contents(id),
                block_type VARCHAR(50) NOT NULL,
                block_order INTEGER NOT NULL,
                is_visible BOOLEAN NOT NULL DEFAULT TRUE,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            );

            CREATE TABLE IF NOT EXISTS content_block_data (
                id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
                block_id UUID NOT NULL UNIQUE REFERENCES content_blocks(id),
                data_type VARCHAR(50) NOT NULL,
                content_text TEXT NOT NULL DEFAULT '',
                content_richtext JSONB,
                content_number DECIMAL(20,6),
                content_url VARCHAR(2048) NOT NULL DEFAULT '',
                content_json JSONB,
                referenced_content_id UUID,
                settings JSONB,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            );

            CREATE INDEX IF NOT EXISTS idx_contents_status ON contents(status);
            CREATE INDEX IF NOT EXISTS idx_contents_author_id ON contents(author_id);
            CREATE INDEX IF NOT EXISTS idx_contents_created_at ON contents(created_at);
            CREATE INDEX IF NOT EXISTS idx_content_blocks_content_id ON content_blocks(content_id);
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn insert_blocks(
        tx: &mut Transaction<'_, Postgres>,
        ctx: &RequestContext,
        content: &mut Content,
    ) -> RepositoryResult<()> {
        let now = Utc::now();

        for block in &mut content.blocks {
            ctx.ensure_active()?;

            if block.id.is_nil() {
                block.id = Uuid::new_v4();
            }
            block.content_id = content.id;
            block.created_at = now;
            block.updated_at = now;

            let row = ContentBlockRow::from_entity(block);
            sqlx::query(
                r#"
                INSERT INTO content_blocks (
                    id, content_id, block_type, block_order, is_visible,
                    created_at, updated_at
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                "#,
            )
            .bind(row.id)
            .bind(row.content_id)
            .bind(&row.block_type)
            .bind(row.block_order)
            .bind(row.is_visible)
            .bind(row.created_at)
            .bind(row.updated_at)
            .execute(&mut **tx)
            .await
            .map_err(|e| storage_error("inserting content block", e))?;

            if let Some(data) = &mut block.data {
                if data.id.is_nil() {
                    data.id = Uuid::new_v4();
                }
                data.block_id = block.id;
                data.created_at = now;
                data.updated_at = now;

                let row = ContentBlockDataRow::from_entity(data);
                sqlx::query(
                    r#"
                    INSERT INTO content_block_data (
                        id, block_id, data_type, content_text, content_richtext,
                        content_number, content_url, content_json,
                        referenced_content_id, settings, created_at, updated_at
                    )
                    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
                    "#,
                )
                .bind(row.id)
                .bind(row.block_id)
                .bind(&row.data_type)
                .bind(&row.content_text)
                .bind(&row.content_richtext)
                .bind(row.content_number)
                .bind(&row.content_url)
                .bind(&row.content_json)
                .bind(row.referenced_content_id)
                .bind(&row.settings)
                .bind(row.created_at)
                .bind(row.updated_at)
                .execute(&mut **tx)
                .await
                .map_err(|e| storage_error("inserting content block data", e))?;
            }
        }

        Ok(())
    }

    /// Delete the block set of a content item in dependency order: data rows
    /// first, then the blocks.
    async fn delete_blocks(
        tx: &mut Transaction<'_, Postgres>,
        content_id: Uuid,
    ) -> RepositoryResult<()> {
        sqlx::query(
            r#"
            DELETE FROM content_block_data
            WHERE block_id IN (SELECT id FROM content_blocks WHERE content_id = $1)
            "#,
        )
        .bind(content_id)
        .execute(&mut **tx)
        .await
        .map_err(|e| storage_error("deleting content block data", e))?;

        sqlx::query("DELETE FROM content_blocks WHERE content_id = $1")
            .bind(content_id)
            .execute(&mut **tx)
            .await
            .map_err(|e| storage_error("deleting content blocks", e))?;

        Ok(())
    }

    async fn exists(&self, id: Uuid) -> RepositoryResult<bool> {
        let found: Option<i32> = sqlx::query_scalar("SELECT 1 FROM contents WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| storage_error("checking content existence", e))?;

        Ok(found.is_some())
    }
}

/// Build the WHERE clause for a content query. Returns the SQL fragment and
/// the text parameters to bind, in order.
fn build_filter_clause(query: &ContentQuery) -> (String, Vec<String>) {
    let mut conditions = Vec::new();
    let mut params = Vec::new();

    if let Some(status) = &query.filter.status {
        params.push(status.as_str().to_string());
        conditions.push(format!("status = ${}", params.len()));
    }
    if let Some(author_id) = &query.filter.author_id {
        params.push(author_id.clone());
        conditions.push(format!("author_id = ${}", params.len()));
    }
    if let Some(search) = &query.filter.search {
        params.push(format!("%{}%", search));
        let n = params.len();
        conditions.push(format!("(title ILIKE ${n} OR slug ILIKE ${n})"));
    }

    let clause = if conditions.is_empty() {
        String::new()
    } else {
        format!(" WHERE {}", conditions.join(" AND "))
    };

    (clause, params)
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

#[async_trait]
impl ContentRepository for SqlContentRepository {
    async fn get_by_id(&self, ctx: &RequestContext, id: Uuid) -> RepositoryResult<Content> {
        ctx.ensure_active()?;

        let content: ContentRow = sqlx::query_as(
            r#"
            SELECT id, content_type_id, title, slug, status, created_at,
                   updated_at, published_at, author_id, version
            FROM contents WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| storage_error("fetching content", e))?
        .ok_or_else(|| RepositoryError::not_found("Content", id))?;

        ctx.ensure_active()?;
        let content_type: Option<ContentTypeRow> = sqlx::query_as(
            r#"
            SELECT id, name, display_name, description, icon, is_active,
                   created_at, updated_at, created_by
            FROM content_types WHERE id = $1
            "#,
        )
        .bind(content.content_type_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| storage_error("fetching content type", e))?;

        ctx.ensure_active()?;
        let blocks: Vec<ContentBlockRow> = sqlx::query_as(
            r#"
            SELECT id, content_id, block_type, block_order, is_visible,
                   created_at, updated_at
            FROM content_blocks WHERE content_id = $1
            ORDER BY block_order
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| storage_error("fetching content blocks", e))?;

        let block_ids: Vec<Uuid> = blocks.iter().map(|b| b.id).collect();

        ctx.ensure_active()?;
        let data: Vec<ContentBlockDataRow> = sqlx::query_as(
            r#"
            SELECT id, block_id, data_type, content_text, content_richtext,
                   content_number, content_url, content_json,
                   referenced_content_id, settings, created_at, updated_at
            FROM content_block_data WHERE block_id = ANY($1)
            "#,
        )
        .bind(&block_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| storage_error("fetching content block data", e))?;

        Ok(assemble_content(content, content_type, blocks, data))
    }

    async fn list(
        &self,
        ctx: &RequestContext,
        query: &ContentQuery,
    ) -> RepositoryResult<ContentPage> {
        ctx.ensure_active()?;

        let (clause, params) = build_filter_clause(query);

        // Count and page are two independent reads against the same
        // predicate; under concurrent writes they may disagree.
        let count_sql = format!("SELECT COUNT(*) FROM contents{}", clause);
        let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql);
        for param in &params {
            count_query = count_query.bind(param);
        }
        let total_count = count_query
            .fetch_one(&self.pool)
            .await
            .map_err(|e| storage_error("counting contents", e))?;

        ctx.ensure_active()?;

        let sort_column = query
            .sort_by
            .unwrap_or(SortField::CreatedAt)
            .column();
        let mut page_sql = format!(
            "SELECT id, content_type_id, title, slug, status, created_at, \
             updated_at, published_at, author_id, version FROM contents{} \
             ORDER BY {} {}",
            clause,
            sort_column,
            query.sort_direction.as_sql()
        );
        if let Some(limit) = query.limit {
            page_sql.push_str(&format!(" LIMIT {}", limit));
        }
        if query.offset > 0 {
            page_sql.push_str(&format!(" OFFSET {}", query.offset));
        }

        let mut page_query = sqlx::query_as::<_, ContentRow>(&page_sql);
        for param in &params {
            page_query = page_query.bind(param);
        }
        let rows = page_query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| storage_error("listing contents", e))?;

        Ok(ContentPage {
            contents: rows.iter().map(|row| row.to_entity()).collect(),
            total_count,
        })
    }

    async fn create(&self, ctx: &RequestContext, content: Content) -> RepositoryResult<Content> {
        content.validate()?;
        ctx.ensure_active()?;

        let mut content = content;
        if content.id.is_nil() {
            content.id = Uuid::new_v4();
        }
        let now = Utc::now();
        content.created_at = now;
        content.updated_at = now;

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| storage_error("starting transaction", e))?;

        let row = ContentRow::from_entity(&content);
        sqlx::query(
            r#"
            INSERT INTO contents (
                id, content_type_id, title, slug, status, created_at,
                updated_at, published_at, author_id, version
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(row.id)
        .bind(row.content_type_id)
        .bind(&row.title)
        .bind(&row.slug)
        .bind(&row.status)
        .bind(row.created_at)
        .bind(row.updated_at)
        .bind(row.published_at)
        .bind(&row.author_id)
        .bind(row.version)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                RepositoryError::Conflict {
                    entity: "Content",
                    field: "slug",
                    value: content.slug.clone(),
                }
            } else {
                storage_error("inserting content", e)
            }
        })?;

        Self::insert_blocks(&mut tx, ctx, &mut content).await?;

        tx.commit()
            .await
            .map_err(|e| storage_error("committing content create", e))?;

        Ok(content)
    }

    async fn update(&self, ctx: &RequestContext, content: Content) -> RepositoryResult<()> {
        content.validate()?;
        ctx.ensure_active()?;

        if !self.exists(content.id).await? {
            return Err(RepositoryError::not_found("Content", content.id));
        }

        let mut content = content;
        content.updated_at = Utc::now();

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| storage_error("starting transaction", e))?;

        let row = ContentRow::from_entity(&content);
        sqlx::query(
            r#"
            UPDATE contents
            SET content_type_id = $2, title = $3, slug = $4, status = $5,
                updated_at = $6, published_at = $7, author_id = $8, version = $9
            WHERE id = $1
            "#,
        )
        .bind(row.id)
        .bind(row.content_type_id)
        .bind(&row.title)
        .bind(&row.slug)
        .bind(&row.status)
        .bind(row.updated_at)
        .bind(row.published_at)
        .bind(&row.author_id)
        .bind(row.version)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                RepositoryError::Conflict {
                    entity: "Content",
                    field: "slug",
                    value: content.slug.clone(),
                }
            } else {
                storage_error("updating content", e)
            }
        })?;

        // Replace the block set only when the caller supplied one; an empty
        // block list leaves the stored blocks untouched.
        if !content.blocks.is_empty() {
            Self::delete_blocks(&mut tx, content.id).await?;
            Self::insert_blocks(&mut tx, ctx, &mut content).await?;
        }

        tx.commit()
            .await
            .map_err(|e| storage_error("committing content update", e))?;

        Ok(())
    }

    async fn delete(&self, ctx: &RequestContext, id: Uuid) -> RepositoryResult<()> {
        ctx.ensure_active()?;

        if !self.exists(id).await? {
            return Err(RepositoryError::not_found("Content", id));
        }

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| storage_error("starting transaction", e))?;

        Self::delete_blocks(&mut tx, id).await?;

        sqlx::query("DELETE FROM contents WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| storage_error("deleting content", e))?;

        tx.commit()
            .await
            .map_err(|e| storage_error("committing content delete", e))?;

        Ok(())
    }
}

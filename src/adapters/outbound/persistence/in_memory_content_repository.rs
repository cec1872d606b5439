use async_trait::async_trait;
use chrono::Utc;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    domain::{
        context::RequestContext,
        entities::Content,
        errors::{RepositoryError, RepositoryResult},
    },
    ports::repositories::{
        ContentPage, ContentQuery, ContentRepository, SortDirection, SortField,
    },
};

/// In-memory implementation of ContentRepository for testing and development.
/// Mirrors the relational backend's semantics: slug uniqueness, identity
/// assignment, block ordering, and replace-on-update for non-empty block sets.
#[derive(Clone)]
pub struct InMemoryContentRepository {
    contents: Arc<RwLock<HashMap<Uuid, Content>>>,
}

impl InMemoryContentRepository {
    pub fn new() -> Self {
        Self {
            contents: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryContentRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn matches(query: &ContentQuery, content: &Content) -> bool {
    if let Some(status) = &query.filter.status {
        if content.status != *status {
            return false;
        }
    }
    if let Some(author_id) = &query.filter.author_id {
        if content.author_id != *author_id {
            return false;
        }
    }
    if let Some(search) = &query.filter.search {
        let needle = search.to_lowercase();
        if !content.title.to_lowercase().contains(&needle)
            && !content.slug.to_lowercase().contains(&needle)
        {
            return false;
        }
    }
    true
}

fn compare(field: SortField, a: &Content, b: &Content) -> Ordering {
    match field {
        SortField::Title => a.title.cmp(&b.title),
        SortField::Slug => a.slug.cmp(&b.slug),
        SortField::Status => a.status.as_str().cmp(b.status.as_str()),
        SortField::CreatedAt => a.created_at.cmp(&b.created_at),
        SortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
        SortField::PublishedAt => a.published_at.cmp(&b.published_at),
    }
}

/// Strip associations the way a flat listing row would: no content type, no
/// blocks.
fn flatten(content: &Content) -> Content {
    let mut flat = content.clone();
    flat.content_type = None;
    flat.blocks = Vec::new();
    flat
}

#[async_trait]
impl ContentRepository for InMemoryContentRepository {
    async fn get_by_id(&self, ctx: &RequestContext, id: Uuid) -> RepositoryResult<Content> {
        ctx.ensure_active()?;

        let contents = self.contents.read().await;
        contents
            .get(&id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found("Content", id))
    }

    async fn list(
        &self,
        ctx: &RequestContext,
        query: &ContentQuery,
    ) -> RepositoryResult<ContentPage> {
        ctx.ensure_active()?;

        let contents = self.contents.read().await;
        let mut filtered: Vec<Content> = contents
            .values()
            .filter(|content| matches(query, content))
            .map(flatten)
            .collect();

        let total_count = filtered.len() as i64;

        let field = query.sort_by.unwrap_or(SortField::CreatedAt);
        filtered.sort_by(|a, b| match query.sort_direction {
            SortDirection::Asc => compare(field, a, b),
            SortDirection::Desc => compare(field, b, a),
        });

        let offset = query.offset.max(0) as usize;
        let page: Vec<Content> = match query.limit {
            Some(limit) => filtered
                .into_iter()
                .skip(offset)
                .take(limit.max(0) as usize)
                .collect(),
            None => filtered.into_iter().skip(offset).collect(),
        };

        Ok(ContentPage {
            contents: page,
            total_count,
        })
    }

    async fn create(&self, ctx: &RequestContext, content: Content) -> RepositoryResult<Content> {
        content.validate()?;
        ctx.ensure_active()?;

        let mut contents = self.contents.write().await;
        if contents.values().any(|c| c.slug == content.slug) {
            return Err(RepositoryError::Conflict {
                entity: "Content",
                field: "slug",
                value: content.slug,
            });
        }

        let mut content = content;
        if content.id.is_nil() {
            content.id = Uuid::new_v4();
        }
        let now = Utc::now();
        content.created_at = now;
        content.updated_at = now;

        for block in &mut content.blocks {
            if block.id.is_nil() {
                block.id = Uuid::new_v4();
            }
            block.content_id = content.id;
            block.created_at = now;
            block.updated_at = now;
            if let Some(data) = &mut block.data {
                if data.id.is_nil() {
                    data.id = Uuid::new_v4();
                }
                data.block_id = block.id;
                data.created_at = now;
                data.updated_at = now;
            }
        }
        content.blocks.sort_by_key(|b| b.block_order);

        contents.insert(content.id, content.clone());
        Ok(content)
    }

    async fn update(&self, ctx: &RequestContext, content: Content) -> RepositoryResult<()> {
        content.validate()?;
        ctx.ensure_active()?;

        let mut contents = self.contents.write().await;
        let existing = contents
            .get(&content.id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found("Content", content.id))?;

        if contents
            .values()
            .any(|c| c.id != content.id && c.slug == content.slug)
        {
            return Err(RepositoryError::Conflict {
                entity: "Content",
                field: "slug",
                value: content.slug,
            });
        }

        let mut content = content;
        let now = Utc::now();
        content.created_at = existing.created_at;
        content.updated_at = now;

        if content.blocks.is_empty() {
            content.blocks = existing.blocks;
        } else {
            for block in &mut content.blocks {
                if block.id.is_nil() {
                    block.id = Uuid::new_v4();
                }
                block.content_id = content.id;
                block.created_at = now;
                block.updated_at = now;
                if let Some(data) = &mut block.data {
                    if data.id.is_nil() {
                        data.id = Uuid::new_v4();
                    }
                    data.block_id = block.id;
                    data.created_at = now;
                    data.updated_at = now;
                }
            }
            content.blocks.sort_by_key(|b| b.block_order);
        }

        contents.insert(content.id, content);
        Ok(())
    }

    async fn delete(&self, ctx: &RequestContext, id: Uuid) -> RepositoryResult<()> {
        ctx.ensure_active()?;

        let mut contents = self.contents.write().await;
        contents
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::not_found("Content", id))
    }
}

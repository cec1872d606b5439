use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    domain::{
        context::RequestContext,
        entities::ContentType,
        errors::{RepositoryError, RepositoryResult},
    },
    ports::repositories::ContentTypeRepository,
};

/// In-memory implementation of ContentTypeRepository. Name uniqueness is
/// enforced by scanning, matching the relational backend's UNIQUE constraint.
#[derive(Clone)]
pub struct InMemoryContentTypeRepository {
    content_types: Arc<RwLock<HashMap<Uuid, ContentType>>>,
}

impl InMemoryContentTypeRepository {
    pub fn new() -> Self {
        Self {
            content_types: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryContentTypeRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentTypeRepository for InMemoryContentTypeRepository {
    async fn get_by_id(&self, ctx: &RequestContext, id: Uuid) -> RepositoryResult<ContentType> {
        ctx.ensure_active()?;

        let content_types = self.content_types.read().await;
        content_types
            .get(&id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found("ContentType", id))
    }

    async fn list(
        &self,
        ctx: &RequestContext,
        active_only: bool,
    ) -> RepositoryResult<Vec<ContentType>> {
        ctx.ensure_active()?;

        let content_types = self.content_types.read().await;
        let mut result: Vec<ContentType> = content_types
            .values()
            .filter(|ct| !active_only || ct.is_active)
            .cloned()
            .collect();
        result.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(result)
    }

    async fn create(
        &self,
        ctx: &RequestContext,
        content_type: ContentType,
    ) -> RepositoryResult<ContentType> {
        content_type.validate()?;
        ctx.ensure_active()?;

        let mut content_types = self.content_types.write().await;
        if content_types.values().any(|ct| ct.name == content_type.name) {
            return Err(RepositoryError::Conflict {
                entity: "ContentType",
                field: "name",
                value: content_type.name,
            });
        }

        let mut content_type = content_type;
        if content_type.id.is_nil() {
            content_type.id = Uuid::new_v4();
        }
        let now = Utc::now();
        content_type.created_at = now;
        content_type.updated_at = now;

        content_types.insert(content_type.id, content_type.clone());
        Ok(content_type)
    }

    async fn update(
        &self,
        ctx: &RequestContext,
        content_type: ContentType,
    ) -> RepositoryResult<()> {
        content_type.validate()?;
        ctx.ensure_active()?;

        let mut content_types = self.content_types.write().await;
        let existing = content_types
            .get(&content_type.id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found("ContentType", content_type.id))?;

        if content_types
            .values()
            .any(|ct| ct.id != content_type.id && ct.name == content_type.name)
        {
            return Err(RepositoryError::Conflict {
                entity: "ContentType",
                field: "name",
                value: content_type.name,
            });
        }

        let mut content_type = content_type;
        content_type.created_at = existing.created_at;
        content_type.updated_at = Utc::now();

        content_types.insert(content_type.id, content_type);
        Ok(())
    }

    async fn delete(&self, ctx: &RequestContext, id: Uuid) -> RepositoryResult<()> {
        ctx.ensure_active()?;

        let mut content_types = self.content_types.write().await;
        content_types
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::not_found("ContentType", id))
    }
}

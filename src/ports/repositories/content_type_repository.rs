use crate::domain::{context::RequestContext, entities::ContentType, errors::RepositoryResult};
use async_trait::async_trait;
use uuid::Uuid;

/// Persistence gateway for content types. Names are unique: `create` fails
/// with a Conflict when the name is already taken (check-then-insert; the
/// window between check and insert is an accepted gap on backends without a
/// unique constraint).
#[async_trait]
pub trait ContentTypeRepository: Send + Sync + 'static {
    async fn get_by_id(&self, ctx: &RequestContext, id: Uuid) -> RepositoryResult<ContentType>;

    /// List content types, optionally restricted to active ones.
    async fn list(
        &self,
        ctx: &RequestContext,
        active_only: bool,
    ) -> RepositoryResult<Vec<ContentType>>;

    async fn create(
        &self,
        ctx: &RequestContext,
        content_type: ContentType,
    ) -> RepositoryResult<ContentType>;

    async fn update(
        &self,
        ctx: &RequestContext,
        content_type: ContentType,
    ) -> RepositoryResult<()>;

    async fn delete(&self, ctx: &RequestContext, id: Uuid) -> RepositoryResult<()>;
}

use crate::{
    domain::{
        context::RequestContext,
        entities::{Article, Content, ContentType},
        errors::RepositoryResult,
    },
    ports::repositories::{ContentPage, ContentQuery},
};
use async_trait::async_trait;
use uuid::Uuid;

/// Port for the content use case. A thin pass-through over the repositories:
/// no business logic lives here, and repository errors are forwarded
/// unchanged.
#[async_trait]
pub trait ContentService: Send + Sync + 'static {
    // Content aggregate
    async fn list_contents(
        &self,
        ctx: &RequestContext,
        query: &ContentQuery,
    ) -> RepositoryResult<ContentPage>;

    async fn get_content(&self, ctx: &RequestContext, id: Uuid) -> RepositoryResult<Content>;

    async fn create_content(
        &self,
        ctx: &RequestContext,
        content: Content,
    ) -> RepositoryResult<Content>;

    async fn update_content(&self, ctx: &RequestContext, content: Content)
        -> RepositoryResult<()>;

    async fn delete_content(&self, ctx: &RequestContext, id: Uuid) -> RepositoryResult<()>;

    // Content types
    async fn list_content_types(
        &self,
        ctx: &RequestContext,
        active_only: bool,
    ) -> RepositoryResult<Vec<ContentType>>;

    async fn get_content_type(
        &self,
        ctx: &RequestContext,
        id: Uuid,
    ) -> RepositoryResult<ContentType>;

    async fn create_content_type(
        &self,
        ctx: &RequestContext,
        content_type: ContentType,
    ) -> RepositoryResult<ContentType>;

    async fn update_content_type(
        &self,
        ctx: &RequestContext,
        content_type: ContentType,
    ) -> RepositoryResult<()>;

    async fn delete_content_type(&self, ctx: &RequestContext, id: Uuid) -> RepositoryResult<()>;

    // Key-value article variant
    async fn list_articles(&self, ctx: &RequestContext) -> RepositoryResult<Vec<Article>>;
}

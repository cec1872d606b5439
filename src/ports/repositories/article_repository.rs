use crate::domain::{context::RequestContext, entities::Article, errors::RepositoryResult};
use async_trait::async_trait;
use uuid::Uuid;

/// Persistence gateway for the key-value article variant.
///
/// Listing is a single secondary-index query ordered by write time; the count
/// is the size of the returned set, so total and page are conflated. Writes
/// are per-item and non-atomic.
#[async_trait]
pub trait ArticleRepository: Send + Sync + 'static {
    async fn list_articles(&self, ctx: &RequestContext) -> RepositoryResult<Vec<Article>>;

    async fn get_article(&self, ctx: &RequestContext, id: Uuid) -> RepositoryResult<Article>;

    async fn create_article(
        &self,
        ctx: &RequestContext,
        article: Article,
    ) -> RepositoryResult<Article>;

    async fn update_article(&self, ctx: &RequestContext, article: Article)
        -> RepositoryResult<()>;

    async fn delete_article(&self, ctx: &RequestContext, id: Uuid) -> RepositoryResult<()>;
}

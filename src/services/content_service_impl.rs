use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    domain::{
        context::RequestContext,
        entities::{Article, Content, ContentType},
        errors::RepositoryResult,
    },
    ports::{
        repositories::{
            ArticleRepository, ContentPage, ContentQuery, ContentRepository,
            ContentTypeRepository,
        },
        services::ContentService,
    },
};

/// Implementation of ContentService. Forwards every call to the matching
/// repository and returns the result unchanged; the repositories own all
/// validation and transactional behavior.
#[derive(Clone)]
pub struct ContentServiceImpl {
    contents: Arc<dyn ContentRepository>,
    content_types: Arc<dyn ContentTypeRepository>,
    articles: Arc<dyn ArticleRepository>,
}

impl ContentServiceImpl {
    pub fn new(
        contents: Arc<dyn ContentRepository>,
        content_types: Arc<dyn ContentTypeRepository>,
        articles: Arc<dyn ArticleRepository>,
    ) -> Self {
        Self {
            contents,
            content_types,
            articles,
        }
    }
}

#[async_trait]
impl ContentService for ContentServiceImpl {
    async fn list_contents(
        &self,
        ctx: &RequestContext,
        query: &ContentQuery,
    ) -> RepositoryResult<ContentPage> {
        self.contents.list(ctx, query).await
    }

    async fn get_content(&self, ctx: &RequestContext, id: Uuid) -> RepositoryResult<Content> {
        self.contents.get_by_id(ctx, id).await
    }

    async fn create_content(
        &self,
        ctx: &RequestContext,
        content: Content,
    ) -> RepositoryResult<Content> {
        self.contents.create(ctx, content).await
    }

    async fn update_content(
        &self,
        ctx: &RequestContext,
        content: Content,
    ) -> RepositoryResult<()> {
        self.contents.update(ctx, content).await
    }

    async fn delete_content(&self, ctx: &RequestContext, id: Uuid) -> RepositoryResult<()> {
        self.contents.delete(ctx, id).await
    }

    async fn list_content_types(
        &self,
        ctx: &RequestContext,
        active_only: bool,
    ) -> RepositoryResult<Vec<ContentType>> {
        self.content_types.list(ctx, active_only).await
    }

    async fn get_content_type(
        &self,
        ctx: &RequestContext,
        id: Uuid,
    ) -> RepositoryResult<ContentType> {
        self.content_types.get_by_id(ctx, id).await
    }

    async fn create_content_type(
        &self,
        ctx: &RequestContext,
        content_type: ContentType,
    ) -> RepositoryResult<ContentType> {
        self.content_types.create(ctx, content_type).await
    }

    async fn update_content_type(
        &self,
        ctx: &RequestContext,
        content_type: ContentType,
    ) -> RepositoryResult<()> {
        self.content_types.update(ctx, content_type).await
    }

    async fn delete_content_type(&self, ctx: &RequestContext, id: Uuid) -> RepositoryResult<()> {
        self.content_types.delete(ctx, id).await
    }

    async fn list_articles(&self, ctx: &RequestContext) -> RepositoryResult<Vec<Article>> {
        self.articles.list_articles(ctx).await
    }
}

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    domain::{
        context::RequestContext,
        entities::Article,
        errors::{RepositoryError, RepositoryResult},
    },
    ports::repositories::ArticleRepository,
};

/// In-memory implementation of ArticleRepository. Listing returns articles in
/// publication-time order, matching the key-value backend's index ordering.
#[derive(Clone)]
pub struct InMemoryArticleRepository {
    articles: Arc<RwLock<HashMap<Uuid, Article>>>,
}

impl InMemoryArticleRepository {
    pub fn new() -> Self {
        Self {
            articles: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// A repository pre-populated with a couple of articles, handy for demos
    /// and router tests.
    pub async fn with_sample_data() -> Self {
        let repo = Self::new();
        let ctx = RequestContext::new();

        let mut welcome = Article::new("Welcome", "This is the first article.");
        welcome.description = "Introductory article".to_string();
        welcome.status = "published".to_string();
        welcome.tags = vec!["intro".to_string()];

        let mut roadmap = Article::new("Roadmap", "What is coming next.");
        roadmap.description = "Planned work".to_string();
        roadmap.status = "published".to_string();
        roadmap.published_at = welcome.published_at + chrono::Duration::hours(1);

        // Both inserts go through create_article, so identities are assigned
        // the same way as production writes.
        let _ = repo.create_article(&ctx, welcome).await;
        let _ = repo.create_article(&ctx, roadmap).await;

        repo
    }
}

impl Default for InMemoryArticleRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArticleRepository for InMemoryArticleRepository {
    async fn list_articles(&self, ctx: &RequestContext) -> RepositoryResult<Vec<Article>> {
        ctx.ensure_active()?;

        let articles = self.articles.read().await;
        let mut result: Vec<Article> = articles.values().cloned().collect();
        result.sort_by(|a, b| {
            a.published_at
                .cmp(&b.published_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(result)
    }

    async fn get_article(&self, ctx: &RequestContext, id: Uuid) -> RepositoryResult<Article> {
        ctx.ensure_active()?;

        let articles = self.articles.read().await;
        articles
            .get(&id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found("Article", id))
    }

    async fn create_article(
        &self,
        ctx: &RequestContext,
        article: Article,
    ) -> RepositoryResult<Article> {
        ctx.ensure_active()?;

        let mut articles = self.articles.write().await;

        let mut article = article;
        if article.id.is_nil() {
            article.id = Uuid::new_v4();
        }
        if articles.contains_key(&article.id) {
            return Err(RepositoryError::Conflict {
                entity: "Article",
                field: "id",
                value: article.id.to_string(),
            });
        }
        article.updated_at = Utc::now();

        articles.insert(article.id, article.clone());
        Ok(article)
    }

    async fn update_article(
        &self,
        ctx: &RequestContext,
        article: Article,
    ) -> RepositoryResult<()> {
        ctx.ensure_active()?;

        let mut articles = self.articles.write().await;
        if !articles.contains_key(&article.id) {
            return Err(RepositoryError::not_found("Article", article.id));
        }

        let mut article = article;
        article.updated_at = Utc::now();
        articles.insert(article.id, article);
        Ok(())
    }

    async fn delete_article(&self, ctx: &RequestContext, id: Uuid) -> RepositoryResult<()> {
        ctx.ensure_active()?;

        let mut articles = self.articles.write().await;
        articles
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::not_found("Article", id))
    }
}

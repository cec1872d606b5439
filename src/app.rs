use sqlx::{PgPool, postgres::PgPoolOptions};
use std::sync::Arc;

use crate::{
    adapters::outbound::{
        dynamodb::DynamoDbArticleRepository,
        persistence::{
            InMemoryArticleRepository, InMemoryContentRepository, InMemoryContentTypeRepository,
            SqlContentRepository, SqlContentTypeRepository,
        },
    },
    ports::repositories::{ArticleRepository, ContentRepository, ContentTypeRepository},
    services::ContentServiceImpl,
};

const PG_MAX_CONNECTIONS: u32 = 25;

/// Configuration for the application
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub content_backend: ContentBackend,
    pub article_backend: ArticleBackend,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            content_backend: ContentBackend::InMemory,
            article_backend: ArticleBackend::InMemory,
        }
    }
}

/// Backend serving the content and content-type repositories
#[derive(Debug, Clone)]
pub enum ContentBackend {
    InMemory,
    Postgres { connection_string: String },
}

/// Backend serving the article repository
#[derive(Debug, Clone)]
pub enum ArticleBackend {
    InMemory,
    DynamoDb {
        table_name: String,
        region: Option<String>,
        endpoint: Option<String>,
    },
}

/// Application dependencies container
pub struct AppDependencies {
    pub content_repository: Arc<dyn ContentRepository>,
    pub content_type_repository: Arc<dyn ContentTypeRepository>,
    pub article_repository: Arc<dyn ArticleRepository>,
    /// Present only for the relational backend; used by the healthcheck
    pub db_pool: Option<PgPool>,
}

/// Application services container
pub struct AppServices {
    pub content_service: ContentServiceImpl,
    pub db_pool: Option<PgPool>,
}

/// Application builder for dependency injection
pub struct AppBuilder {
    config: AppConfig,
}

impl AppBuilder {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    /// Configure the application with custom settings
    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    /// Configure the content backend
    pub fn with_content_backend(mut self, backend: ContentBackend) -> Self {
        self.config.content_backend = backend;
        self
    }

    /// Configure the article backend
    pub fn with_article_backend(mut self, backend: ArticleBackend) -> Self {
        self.config.article_backend = backend;
        self
    }

    /// Build the application dependencies
    pub async fn build_dependencies(self) -> Result<AppDependencies, AppError> {
        let (content_repository, content_type_repository, db_pool) =
            self.create_content_repositories().await?;
        let article_repository = self.create_article_repository().await?;

        Ok(AppDependencies {
            content_repository,
            content_type_repository,
            article_repository,
            db_pool,
        })
    }

    /// Build the complete application with services
    pub async fn build(self) -> Result<AppServices, AppError> {
        let deps = self.build_dependencies().await?;

        let content_service = ContentServiceImpl::new(
            deps.content_repository,
            deps.content_type_repository,
            deps.article_repository,
        );

        Ok(AppServices {
            content_service,
            db_pool: deps.db_pool,
        })
    }

    async fn create_content_repositories(
        &self,
    ) -> Result<
        (
            Arc<dyn ContentRepository>,
            Arc<dyn ContentTypeRepository>,
            Option<PgPool>,
        ),
        AppError,
    > {
        match &self.config.content_backend {
            ContentBackend::InMemory => Ok((
                Arc::new(InMemoryContentRepository::new()),
                Arc::new(InMemoryContentTypeRepository::new()),
                None,
            )),
            ContentBackend::Postgres { connection_string } => {
                let pool = PgPoolOptions::new()
                    .max_connections(PG_MAX_CONNECTIONS)
                    .connect(connection_string)
                    .await
                    .map_err(|e| AppError::RepositoryInit {
                        message: format!("Failed to connect to database: {}", e),
                    })?;

                let content_repo = SqlContentRepository::new(pool.clone());
                content_repo
                    .migrate()
                    .await
                    .map_err(|e| AppError::RepositoryInit {
                        message: format!("Failed to run migrations: {}", e),
                    })?;

                Ok((
                    Arc::new(content_repo),
                    Arc::new(SqlContentTypeRepository::new(pool.clone())),
                    Some(pool),
                ))
            }
        }
    }

    async fn create_article_repository(&self) -> Result<Arc<dyn ArticleRepository>, AppError> {
        match &self.config.article_backend {
            ArticleBackend::InMemory => Ok(Arc::new(InMemoryArticleRepository::new())),
            ArticleBackend::DynamoDb {
                table_name,
                region,
                endpoint,
            } => {
                let mut loader =
                    aws_config::defaults(aws_config::BehaviorVersion::latest());
                if let Some(region) = region {
                    loader = loader.region(aws_config::Region::new(region.clone()));
                }
                if let Some(endpoint) = endpoint {
                    loader = loader.endpoint_url(endpoint);
                }
                let config = loader.load().await;
                let client = aws_sdk_dynamodb::Client::new(&config);

                Ok(Arc::new(DynamoDbArticleRepository::new(
                    client,
                    table_name.clone(),
                )))
            }
        }
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Application-level errors
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Repository initialization error: {message}")]
    RepositoryInit { message: String },
}

/// Create an in-memory application for testing and development
pub async fn create_in_memory_app() -> Result<AppServices, AppError> {
    AppBuilder::new()
        .with_content_backend(ContentBackend::InMemory)
        .with_article_backend(ArticleBackend::InMemory)
        .build()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_in_memory_app() {
        let app = create_in_memory_app().await.unwrap();
        assert!(app.db_pool.is_none());
    }

    #[tokio::test]
    async fn test_dependencies_creation() {
        let deps = AppBuilder::new().build_dependencies().await.unwrap();
        assert!(deps.db_pool.is_none());
    }
}

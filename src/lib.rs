pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

// Re-export key types for convenience

// Domain types - core business entities and errors
pub use domain::{
    Article,
    BlockType,
    Content,
    ContentBlock,
    ContentBlockData,
    ContentStatus,
    ContentType,
    DataType,
    // Execution context
    RequestContext,
    // Errors
    RepositoryError,
    RepositoryResult,
    ValidationError,
};

// Port types - interfaces for external systems
pub use ports::{
    // Repository ports
    ArticleRepository,
    ContentFilter,
    ContentPage,
    ContentQuery,
    ContentRepository,
    // Service ports
    ContentService,
    ContentTypeRepository,
    SortDirection,
    SortField,
};

// Service implementations - business logic
pub use services::ContentServiceImpl;

// Application factory and configuration
pub use app::{
    AppBuilder, AppConfig, AppDependencies, AppError, AppServices, ArticleBackend,
    ContentBackend, create_in_memory_app,
};

// Adapter types - infrastructure implementations
pub use adapters::inbound::http::{AppState, create_router};
pub use adapters::outbound::dynamodb::DynamoDbArticleRepository;
pub use adapters::outbound::persistence::{
    InMemoryArticleRepository, InMemoryContentRepository, InMemoryContentTypeRepository,
    SqlContentRepository, SqlContentTypeRepository,
};

// Public facade for easy construction
pub mod prelude {
    pub use crate::{
        AppBuilder, AppServices, AppState, ArticleRepository, Content, ContentQuery,
        ContentRepository, ContentService, ContentServiceImpl, ContentType,
        ContentTypeRepository, RequestContext, create_in_memory_app, create_router,
    };
}

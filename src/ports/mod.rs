pub mod repositories;
pub mod services;

// Re-export all port traits for convenience
pub use repositories::{
    ArticleRepository, ContentFilter, ContentPage, ContentQuery, ContentRepository,
    ContentTypeRepository, SortDirection, SortField,
};
pub use services::ContentService;

mod article_repository;
mod content_repository;
mod content_type_repository;

pub use article_repository::ArticleRepository;
pub use content_repository::{
    ContentFilter, ContentPage, ContentQuery, ContentRepository, SortDirection, SortField,
};
pub use content_type_repository::ContentTypeRepository;

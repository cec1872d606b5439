mod in_memory_article_repository;
mod in_memory_content_repository;
mod in_memory_content_type_repository;
pub mod models;
mod sql_content_repository;
mod sql_content_type_repository;

pub use in_memory_article_repository::InMemoryArticleRepository;
pub use in_memory_content_repository::InMemoryContentRepository;
pub use in_memory_content_type_repository::InMemoryContentTypeRepository;
pub use sql_content_repository::SqlContentRepository;
pub use sql_content_type_repository::SqlContentTypeRepository;

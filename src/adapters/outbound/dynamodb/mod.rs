//! DynamoDB-backed article storage: single-table key layout, attribute
//! conversion, and the repository itself.

mod article_repository;
pub mod conversions;
pub mod keys;

pub use article_repository::DynamoDbArticleRepository;

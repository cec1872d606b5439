//! Attribute conversion between articles and DynamoDB item maps.
//!
//! Pure functions, testable without a DynamoDB endpoint.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{entities::Article, errors::RepositoryError};

use super::keys;

pub const ENTITY_TYPE_ARTICLE: &str = "ARTICLE";

/// Convert an Article to a DynamoDB item.
pub fn article_to_item(article: &Article) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    // Keys
    item.insert(
        "PK".to_string(),
        AttributeValue::S(keys::article_pk(article.id)),
    );
    item.insert(
        "SK".to_string(),
        AttributeValue::S(keys::article_sk(article.id)),
    );
    item.insert(
        "GSI1PK".to_string(),
        AttributeValue::S(keys::ARTICLE_GSI1_PARTITION.to_string()),
    );
    item.insert(
        "GSI1SK".to_string(),
        AttributeValue::S(keys::article_gsi1_sk(article.published_at, article.id)),
    );

    item.insert(
        "entityType".to_string(),
        AttributeValue::S(ENTITY_TYPE_ARTICLE.to_string()),
    );

    // Data
    item.insert("id".to_string(), AttributeValue::S(article.id.to_string()));
    item.insert(
        "title".to_string(),
        AttributeValue::S(article.title.clone()),
    );
    item.insert(
        "description".to_string(),
        AttributeValue::S(article.description.clone()),
    );
    item.insert("body".to_string(), AttributeValue::S(article.body.clone()));
    item.insert(
        "coverImage".to_string(),
        AttributeValue::S(article.cover_image.clone()),
    );
    item.insert(
        "publishedAt".to_string(),
        AttributeValue::S(article.published_at.to_rfc3339()),
    );
    item.insert(
        "updatedAt".to_string(),
        AttributeValue::S(article.updated_at.to_rfc3339()),
    );
    item.insert(
        "status".to_string(),
        AttributeValue::S(article.status.clone()),
    );
    item.insert(
        "categoryId".to_string(),
        AttributeValue::S(article.category_id.clone()),
    );
    // String sets must not be empty
    if !article.tags.is_empty() {
        item.insert("tags".to_string(), AttributeValue::Ss(article.tags.clone()));
    }

    item
}

/// Convert a DynamoDB item to an Article.
pub fn item_to_article(
    item: &HashMap<String, AttributeValue>,
) -> Result<Article, RepositoryError> {
    Ok(Article {
        id: get_uuid(item, "id")?,
        title: get_string(item, "title")?,
        description: get_string(item, "description")?,
        body: get_string(item, "body")?,
        cover_image: get_string(item, "coverImage")?,
        published_at: get_datetime(item, "publishedAt")?,
        updated_at: get_datetime(item, "updatedAt")?,
        status: get_string(item, "status")?,
        category_id: get_string(item, "categoryId")?,
        tags: get_string_set(item, "tags"),
    })
}

fn get_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .cloned()
        .ok_or_else(|| {
            RepositoryError::storage(format!("Item missing string attribute '{}'", key))
        })
}

fn get_uuid(item: &HashMap<String, AttributeValue>, key: &str) -> Result<Uuid, RepositoryError> {
    let raw = get_string(item, key)?;
    Uuid::parse_str(&raw).map_err(|e| {
        RepositoryError::storage(format!("Invalid UUID in attribute '{}': {}", key, e))
    })
}

fn get_datetime(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<DateTime<Utc>, RepositoryError> {
    let raw = get_string(item, key)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            RepositoryError::storage(format!("Invalid timestamp in attribute '{}': {}", key, e))
        })
}

fn get_string_set(item: &HashMap<String, AttributeValue>, key: &str) -> Vec<String> {
    item.get(key)
        .and_then(|v| v.as_ss().ok())
        .cloned()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_article() -> Article {
        let mut article = Article::new("Hello", "Body text");
        article.id = Uuid::new_v4();
        article.description = "A greeting".to_string();
        article.status = "published".to_string();
        article.category_id = "news".to_string();
        article.tags = vec!["intro".to_string(), "misc".to_string()];
        article
    }

    #[test]
    fn test_article_round_trip() {
        let article = sample_article();
        let item = article_to_item(&article);
        let back = item_to_article(&item).unwrap();

        assert_eq!(back.id, article.id);
        assert_eq!(back.title, article.title);
        assert_eq!(back.body, article.body);
        assert_eq!(back.status, article.status);
        assert_eq!(back.tags, article.tags);
        // RFC 3339 keeps sub-second precision
        assert_eq!(back.published_at, article.published_at);
    }

    #[test]
    fn test_item_keys() {
        let article = sample_article();
        let item = article_to_item(&article);

        let pk = item.get("PK").unwrap().as_s().unwrap();
        assert_eq!(pk, &format!("ARTICLE#{}", article.id));
        assert_eq!(item.get("SK").unwrap().as_s().unwrap(), pk);
        assert_eq!(item.get("GSI1PK").unwrap().as_s().unwrap(), "ARTICLE");
        assert!(item
            .get("GSI1SK")
            .unwrap()
            .as_s()
            .unwrap()
            .starts_with("ARTICLE#"));
    }

    #[test]
    fn test_empty_tags_are_omitted() {
        let mut article = sample_article();
        article.tags.clear();

        let item = article_to_item(&article);
        assert!(!item.contains_key("tags"));

        let back = item_to_article(&item).unwrap();
        assert!(back.tags.is_empty());
    }

    #[test]
    fn test_missing_attribute_is_an_error() {
        let article = sample_article();
        let mut item = article_to_item(&article);
        item.remove("title");

        let err = item_to_article(&item).unwrap_err();
        assert!(err.to_string().contains("title"));
    }
}

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Flat content representation used by the key-value backend. No block
/// decomposition; the body is a single opaque string.
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub body: String,
    pub cover_image: String,
    pub published_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub status: String,
    pub category_id: String,
    pub tags: Vec<String>,
}

impl Article {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::nil(),
            title: title.into(),
            description: String::new(),
            body: body.into(),
            cover_image: String::new(),
            published_at: now,
            updated_at: now,
            status: "draft".to_string(),
            category_id: String::new(),
            tags: Vec::new(),
        }
    }
}

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::errors::ValidationError;

/// Publication status of a content item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentStatus {
    Draft,
    Published,
    Archived,
    /// A stored status string that matches no known member. Preserved verbatim
    /// so a read-modify-write cycle never rewrites data it does not understand.
    Other(String),
}

impl ContentStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ContentStatus::Draft => "draft",
            ContentStatus::Published => "published",
            ContentStatus::Archived => "archived",
            ContentStatus::Other(s) => s,
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "draft" => ContentStatus::Draft,
            "published" => ContentStatus::Published,
            "archived" => ContentStatus::Archived,
            other => ContentStatus::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for ContentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Kind of a content block
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockType {
    Text,
    RichText,
    Image,
    Video,
    Embed,
    Reference,
    Other(String),
}

impl BlockType {
    pub fn as_str(&self) -> &str {
        match self {
            BlockType::Text => "text",
            BlockType::RichText => "richtext",
            BlockType::Image => "image",
            BlockType::Video => "video",
            BlockType::Embed => "embed",
            BlockType::Reference => "reference",
            BlockType::Other(s) => s,
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "text" => BlockType::Text,
            "richtext" => BlockType::RichText,
            "image" => BlockType::Image,
            "video" => BlockType::Video,
            "embed" => BlockType::Embed,
            "reference" => BlockType::Reference,
            other => BlockType::Other(other.to_string()),
        }
    }
}

/// Kind of value carried by a block's data record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataType {
    Text,
    RichText,
    Number,
    Url,
    Json,
    Reference,
    Other(String),
}

impl DataType {
    pub fn as_str(&self) -> &str {
        match self {
            DataType::Text => "text",
            DataType::RichText => "richtext",
            DataType::Number => "number",
            DataType::Url => "url",
            DataType::Json => "json",
            DataType::Reference => "reference",
            DataType::Other(s) => s,
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "text" => DataType::Text,
            "richtext" => DataType::RichText,
            "number" => DataType::Number,
            "url" => DataType::Url,
            "json" => DataType::Json,
            "reference" => DataType::Reference,
            other => DataType::Other(other.to_string()),
        }
    }
}

/// Aggregate root for the content model. Owns its blocks; references (does not
/// own) a content type. A nil id means the identity has not been assigned yet
/// and will be generated by the repository on create.
#[derive(Debug, Clone, PartialEq)]
pub struct Content {
    pub id: Uuid,
    pub content_type_id: Uuid,
    pub title: String,
    pub slug: String,
    pub status: ContentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
    pub author_id: String,
    pub version: i32,

    /// Loaded association; absent when the row was fetched without its type.
    pub content_type: Option<super::ContentType>,
    /// Ordered by block_order.
    pub blocks: Vec<ContentBlock>,
}

impl Content {
    /// Create a draft content item with identity left unassigned.
    pub fn new(
        content_type_id: Uuid,
        title: impl Into<String>,
        slug: impl Into<String>,
        author_id: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::nil(),
            content_type_id,
            title: title.into(),
            slug: slug.into(),
            status: ContentStatus::Draft,
            created_at: now,
            updated_at: now,
            published_at: None,
            author_id: author_id.into(),
            version: 1,
            content_type: None,
            blocks: Vec::new(),
        }
    }

    /// A content item counts as published only when the status says so and a
    /// publication timestamp has actually been recorded.
    pub fn is_published(&self) -> bool {
        self.status == ContentStatus::Published && self.published_at.is_some()
    }

    pub fn is_active(&self) -> bool {
        self.status != ContentStatus::Archived
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if self.slug.is_empty() {
            return Err(ValidationError::EmptySlug);
        }
        if self.author_id.is_empty() {
            return Err(ValidationError::EmptyAuthorId);
        }
        if self.content_type_id.is_nil() {
            return Err(ValidationError::MissingContentTypeId);
        }
        Ok(())
    }
}

/// A single block within a content item, rendered in block_order sequence.
/// Each block owns exactly one data record.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentBlock {
    pub id: Uuid,
    pub content_id: Uuid,
    pub block_type: BlockType,
    pub block_order: i32,
    pub is_visible: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    pub data: Option<ContentBlockData>,
}

impl ContentBlock {
    pub fn new(block_type: BlockType, block_order: i32) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::nil(),
            content_id: Uuid::nil(),
            block_type,
            block_order,
            is_visible: true,
            created_at: now,
            updated_at: now,
            data: None,
        }
    }

    pub fn with_data(mut self, data: ContentBlockData) -> Self {
        self.data = Some(data);
        self
    }
}

/// The typed value of a block. Exactly one value slot is meaningful, selected
/// by data_type; the remaining slots stay at their empty defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentBlockData {
    pub id: Uuid,
    pub block_id: Uuid,
    pub data_type: DataType,
    pub content_text: String,
    pub content_richtext: Option<serde_json::Value>,
    pub content_number: Option<Decimal>,
    pub content_url: String,
    pub content_json: Option<serde_json::Value>,
    pub referenced_content_id: Option<Uuid>,
    pub settings: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ContentBlockData {
    pub fn text(text: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::nil(),
            block_id: Uuid::nil(),
            data_type: DataType::Text,
            content_text: text.into(),
            content_richtext: None,
            content_number: None,
            content_url: String::new(),
            content_json: None,
            referenced_content_id: None,
            settings: None,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_content() -> Content {
        Content::new(Uuid::new_v4(), "Title", "title", "u1")
    }

    #[test]
    fn test_validate_accepts_complete_content() {
        assert!(valid_content().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_fields() {
        let mut c = valid_content();
        c.title = String::new();
        assert_eq!(c.validate(), Err(ValidationError::EmptyTitle));

        let mut c = valid_content();
        c.slug = String::new();
        assert_eq!(c.validate(), Err(ValidationError::EmptySlug));

        let mut c = valid_content();
        c.author_id = String::new();
        assert_eq!(c.validate(), Err(ValidationError::EmptyAuthorId));

        let mut c = valid_content();
        c.content_type_id = Uuid::nil();
        assert_eq!(c.validate(), Err(ValidationError::MissingContentTypeId));
    }

    #[test]
    fn test_is_published_requires_status_and_timestamp() {
        let mut c = valid_content();
        assert!(!c.is_published());

        c.status = ContentStatus::Published;
        assert!(!c.is_published());

        c.published_at = Some(Utc::now());
        assert!(c.is_published());
    }

    #[test]
    fn test_status_round_trips_unknown_strings() {
        let status = ContentStatus::parse("scheduled");
        assert_eq!(status, ContentStatus::Other("scheduled".to_string()));
        assert_eq!(status.as_str(), "scheduled");
    }

    #[test]
    fn test_enum_parsing() {
        assert_eq!(ContentStatus::parse("draft"), ContentStatus::Draft);
        assert_eq!(BlockType::parse("richtext"), BlockType::RichText);
        assert_eq!(DataType::parse("url"), DataType::Url);
    }
}

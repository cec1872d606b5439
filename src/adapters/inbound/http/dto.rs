use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{
    Article, BlockType, Content, ContentBlock, ContentBlockData, ContentStatus, ContentType,
    DataType,
};
use crate::ports::repositories::{ContentFilter, ContentQuery, SortDirection, SortField};

/// DTO for a content item, including its associations when loaded.
#[derive(Debug, Clone, Serialize)]
pub struct ContentDto {
    pub id: Uuid,
    pub content_type_id: Uuid,
    pub title: String,
    pub slug: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
    pub author_id: String,
    pub version: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<ContentTypeDto>,
    pub blocks: Vec<ContentBlockDto>,
}

impl From<Content> for ContentDto {
    fn from(content: Content) -> Self {
        Self {
            id: content.id,
            content_type_id: content.content_type_id,
            title: content.title,
            slug: content.slug,
            status: content.status.as_str().to_string(),
            created_at: content.created_at,
            updated_at: content.updated_at,
            published_at: content.published_at,
            author_id: content.author_id,
            version: content.version,
            content_type: content.content_type.map(ContentTypeDto::from),
            blocks: content
                .blocks
                .into_iter()
                .map(ContentBlockDto::from)
                .collect(),
        }
    }
}

/// DTO for a content block.
#[derive(Debug, Clone, Serialize)]
pub struct ContentBlockDto {
    pub id: Uuid,
    pub content_id: Uuid,
    pub block_type: String,
    pub block_order: i32,
    pub is_visible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ContentBlockDataDto>,
}

impl From<ContentBlock> for ContentBlockDto {
    fn from(block: ContentBlock) -> Self {
        Self {
            id: block.id,
            content_id: block.content_id,
            block_type: block.block_type.as_str().to_string(),
            block_order: block.block_order,
            is_visible: block.is_visible,
            data: block.data.map(ContentBlockDataDto::from),
        }
    }
}

/// DTO for the data payload of a block.
#[derive(Debug, Clone, Serialize)]
pub struct ContentBlockDataDto {
    pub id: Uuid,
    pub block_id: Uuid,
    pub data_type: String,
    pub content_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_richtext: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_number: Option<Decimal>,
    pub content_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_json: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referenced_content_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<serde_json::Value>,
}

impl From<ContentBlockData> for ContentBlockDataDto {
    fn from(data: ContentBlockData) -> Self {
        Self {
            id: data.id,
            block_id: data.block_id,
            data_type: data.data_type.as_str().to_string(),
            content_text: data.content_text,
            content_richtext: data.content_richtext,
            content_number: data.content_number,
            content_url: data.content_url,
            content_json: data.content_json,
            referenced_content_id: data.referenced_content_id,
            settings: data.settings,
        }
    }
}

/// DTO for a content type.
#[derive(Debug, Clone, Serialize)]
pub struct ContentTypeDto {
    pub id: Uuid,
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub icon: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: String,
}

impl From<ContentType> for ContentTypeDto {
    fn from(ct: ContentType) -> Self {
        Self {
            id: ct.id,
            name: ct.name,
            display_name: ct.display_name,
            description: ct.description,
            icon: ct.icon,
            is_active: ct.is_active,
            created_at: ct.created_at,
            updated_at: ct.updated_at,
            created_by: ct.created_by,
        }
    }
}

/// DTO for an article from the key-value backend.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleDto {
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

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id,
            title: article.title,
            description: article.description,
            body: article.body,
            cover_image: article.cover_image,
            published_at: article.published_at,
            updated_at: article.updated_at,
            status: article.status,
            category_id: article.category_id,
            tags: article.tags,
        }
    }
}

/// DTO for creating or replacing a block within a content write.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentBlockInputDto {
    pub block_type: String,
    pub block_order: i32,
    #[serde(default = "default_true")]
    pub is_visible: bool,
    pub data: Option<ContentBlockDataInputDto>,
}

fn default_true() -> bool {
    true
}

/// DTO for the data payload of a block write.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentBlockDataInputDto {
    pub data_type: String,
    #[serde(default)]
    pub content_text: String,
    pub content_richtext: Option<serde_json::Value>,
    pub content_number: Option<Decimal>,
    #[serde(default)]
    pub content_url: String,
    pub content_json: Option<serde_json::Value>,
    pub referenced_content_id: Option<Uuid>,
    pub settings: Option<serde_json::Value>,
}

impl ContentBlockInputDto {
    pub fn into_entity(self) -> ContentBlock {
        let mut block = ContentBlock::new(BlockType::parse(&self.block_type), self.block_order);
        block.is_visible = self.is_visible;
        block.data = self.data.map(|data| {
            let mut entity = ContentBlockData::text(String::new());
            entity.data_type = DataType::parse(&data.data_type);
            entity.content_text = data.content_text;
            entity.content_richtext = data.content_richtext;
            entity.content_number = data.content_number;
            entity.content_url = data.content_url;
            entity.content_json = data.content_json;
            entity.referenced_content_id = data.referenced_content_id;
            entity.settings = data.settings;
            entity
        });
        block
    }
}

/// DTO for creating a content item.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateContentDto {
    pub content_type_id: Uuid,
    pub title: String,
    pub slug: String,
    pub status: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub author_id: String,
    #[serde(default)]
    pub blocks: Vec<ContentBlockInputDto>,
}

impl CreateContentDto {
    pub fn into_entity(self) -> Content {
        let mut content = Content::new(
            self.content_type_id,
            self.title,
            self.slug,
            self.author_id,
        );
        if let Some(status) = self.status {
            content.status = ContentStatus::parse(&status);
        }
        content.published_at = self.published_at;
        content.blocks = self
            .blocks
            .into_iter()
            .map(ContentBlockInputDto::into_entity)
            .collect();
        content
    }
}

/// DTO for replacing a content item. Omitting `blocks` (or sending an empty
/// list) leaves the stored block set unchanged.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateContentDto {
    pub content_type_id: Uuid,
    pub title: String,
    pub slug: String,
    pub status: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
    pub author_id: String,
    pub version: Option<i32>,
    #[serde(default)]
    pub blocks: Vec<ContentBlockInputDto>,
}

impl UpdateContentDto {
    pub fn into_entity(self, id: Uuid) -> Content {
        let mut content = Content::new(
            self.content_type_id,
            self.title,
            self.slug,
            self.author_id,
        );
        content.id = id;
        if let Some(status) = self.status {
            content.status = ContentStatus::parse(&status);
        }
        content.published_at = self.published_at;
        if let Some(version) = self.version {
            content.version = version;
        }
        content.blocks = self
            .blocks
            .into_iter()
            .map(ContentBlockInputDto::into_entity)
            .collect();
        content
    }
}

/// DTO for creating a content type.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateContentTypeDto {
    pub name: String,
    pub display_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    pub created_by: String,
}

impl CreateContentTypeDto {
    pub fn into_entity(self) -> ContentType {
        let mut ct = ContentType::new(self.name, self.display_name, self.created_by);
        ct.description = self.description;
        ct.icon = self.icon;
        ct
    }
}

/// DTO for replacing a content type.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateContentTypeDto {
    pub name: String,
    pub display_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub created_by: String,
}

impl UpdateContentTypeDto {
    pub fn into_entity(self, id: Uuid) -> ContentType {
        let mut ct = ContentType::new(self.name, self.display_name, self.created_by);
        ct.id = id;
        ct.description = self.description;
        ct.icon = self.icon;
        ct.is_active = self.is_active;
        ct
    }
}

/// Query-string parameters for content listings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListContentsParams {
    pub status: Option<String>,
    pub author_id: Option<String>,
    /// Substring match on title or slug
    pub q: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl ListContentsParams {
    /// Build a repository query. Unrecognized sort or order values fall back
    /// to the defaults rather than failing the request.
    pub fn into_query(self) -> ContentQuery {
        ContentQuery {
            filter: ContentFilter {
                status: self.status.map(|s| ContentStatus::parse(&s)),
                author_id: self.author_id,
                search: self.q,
            },
            sort_by: self.sort.as_deref().and_then(SortField::parse),
            sort_direction: self
                .order
                .as_deref()
                .and_then(SortDirection::parse)
                .unwrap_or_default(),
            limit: self.limit,
            offset: self.offset.unwrap_or(0),
        }
    }
}

/// Query-string parameters for content-type listings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListContentTypesParams {
    #[serde(default)]
    pub active_only: bool,
}

/// One page of contents plus the size of the full filtered set.
#[derive(Debug, Clone, Serialize)]
pub struct ListContentsResponseDto {
    pub contents: Vec<ContentDto>,
    pub total_count: i64,
}

/// Uniform error body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponseDto {
    pub error: String,
}

impl ErrorResponseDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Body for write operations that return no entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResponseDto {
    pub message: String,
}

impl SuccessResponseDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

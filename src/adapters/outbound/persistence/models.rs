use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

use crate::domain::entities::{
    BlockType, Content, ContentBlock, ContentBlockData, ContentStatus, ContentType, DataType,
};

/// Row shape of the `contents` table. Enumerations are persisted as plain
/// strings; associations live in their own tables and are attached by
/// [`assemble_content`].
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ContentRow {
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
}

impl ContentRow {
    /// Convert this row into a domain entity with no associations loaded.
    /// Total: an unrecognized status string becomes `ContentStatus::Other`.
    pub fn to_entity(&self) -> Content {
        Content {
            id: self.id,
            content_type_id: self.content_type_id,
            title: self.title.clone(),
            slug: self.slug.clone(),
            status: ContentStatus::parse(&self.status),
            created_at: self.created_at,
            updated_at: self.updated_at,
            published_at: self.published_at,
            author_id: self.author_id.clone(),
            version: self.version,
            content_type: None,
            blocks: Vec::new(),
        }
    }

    pub fn from_entity(content: &Content) -> Self {
        Self {
            id: content.id,
            content_type_id: content.content_type_id,
            title: content.title.clone(),
            slug: content.slug.clone(),
            status: content.status.as_str().to_string(),
            created_at: content.created_at,
            updated_at: content.updated_at,
            published_at: content.published_at,
            author_id: content.author_id.clone(),
            version: content.version,
        }
    }
}

/// Row shape of the `content_types` table.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ContentTypeRow {
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

impl ContentTypeRow {
    pub fn to_entity(&self) -> ContentType {
        ContentType {
            id: self.id,
            name: self.name.clone(),
            display_name: self.display_name.clone(),
            description: self.description.clone(),
            icon: self.icon.clone(),
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
            created_by: self.created_by.clone(),
        }
    }

    pub fn from_entity(content_type: &ContentType) -> Self {
        Self {
            id: content_type.id,
            name: content_type.name.clone(),
            display_name: content_type.display_name.clone(),
            description: content_type.description.clone(),
            icon: content_type.icon.clone(),
            is_active: content_type.is_active,
            created_at: content_type.created_at,
            updated_at: content_type.updated_at,
            created_by: content_type.created_by.clone(),
        }
    }
}

/// Row shape of the `content_blocks` table.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ContentBlockRow {
    pub id: Uuid,
    pub content_id: Uuid,
    pub block_type: String,
    pub block_order: i32,
    pub is_visible: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ContentBlockRow {
    pub fn to_entity(&self) -> ContentBlock {
        ContentBlock {
            id: self.id,
            content_id: self.content_id,
            block_type: BlockType::parse(&self.block_type),
            block_order: self.block_order,
            is_visible: self.is_visible,
            created_at: self.created_at,
            updated_at: self.updated_at,
            data: None,
        }
    }

    pub fn from_entity(block: &ContentBlock) -> Self {
        Self {
            id: block.id,
            content_id: block.content_id,
            block_type: block.block_type.as_str().to_string(),
            block_order: block.block_order,
            is_visible: block.is_visible,
            created_at: block.created_at,
            updated_at: block.updated_at,
        }
    }
}

/// Row shape of the `content_block_data` table. `block_id` is unique in the
/// schema, enforcing the 1:1 between a block and its data.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ContentBlockDataRow {
    pub id: Uuid,
    pub block_id: Uuid,
    pub data_type: String,
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

impl ContentBlockDataRow {
    pub fn to_entity(&self) -> ContentBlockData {
        ContentBlockData {
            id: self.id,
            block_id: self.block_id,
            data_type: DataType::parse(&self.data_type),
            content_text: self.content_text.clone(),
            content_richtext: self.content_richtext.clone(),
            content_number: self.content_number,
            content_url: self.content_url.clone(),
            content_json: self.content_json.clone(),
            referenced_content_id: self.referenced_content_id,
            settings: self.settings.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn from_entity(data: &ContentBlockData) -> Self {
        Self {
            id: data.id,
            block_id: data.block_id,
            data_type: data.data_type.as_str().to_string(),
            content_text: data.content_text.clone(),
            content_richtext: data.content_richtext.clone(),
            content_number: data.content_number,
            content_url: data.content_url.clone(),
            content_json: data.content_json.clone(),
            referenced_content_id: data.referenced_content_id,
            settings: data.settings.clone(),
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }
}

/// Assemble a full content graph from its per-table rows. Blocks are ordered
/// by block_order; each block picks up its data row by block_id. Absent
/// associations stay `None` rather than being invented.
pub fn assemble_content(
    content: ContentRow,
    content_type: Option<ContentTypeRow>,
    mut blocks: Vec<ContentBlockRow>,
    data: Vec<ContentBlockDataRow>,
) -> Content {
    let mut entity = content.to_entity();
    entity.content_type = content_type.map(|row| row.to_entity());

    blocks.sort_by_key(|b| b.block_order);
    entity.blocks = blocks
        .into_iter()
        .map(|block_row| {
            let mut block = block_row.to_entity();
            block.data = data
                .iter()
                .find(|d| d.block_id == block.id)
                .map(|d| d.to_entity());
            block
        })
        .collect();

    entity
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn sample_content_row() -> ContentRow {
        ContentRow {
            id: Uuid::new_v4(),
            content_type_id: Uuid::new_v4(),
            title: "Hello".to_string(),
            slug: "hello".to_string(),
            status: "published".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            published_at: Some(Utc::now()),
            author_id: "u1".to_string(),
            version: 3,
        }
    }

    fn sample_data_row(block_id: Uuid) -> ContentBlockDataRow {
        ContentBlockDataRow {
            id: Uuid::new_v4(),
            block_id,
            data_type: "number".to_string(),
            content_text: String::new(),
            content_richtext: None,
            content_number: Some(Decimal::new(1999, 2)),
            content_url: String::new(),
            content_json: None,
            referenced_content_id: None,
            settings: Some(serde_json::json!({"align": "left"})),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_content_row_round_trip() {
        let row = sample_content_row();
        let entity = row.to_entity();
        let back = ContentRow::from_entity(&entity);
        assert_eq!(row, back);
    }

    #[test]
    fn test_content_row_round_trip_is_idempotent() {
        let row = sample_content_row();
        let once = row.to_entity();
        let twice = ContentRow::from_entity(&once).to_entity();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_unknown_status_survives_round_trip() {
        let mut row = sample_content_row();
        row.status = "scheduled".to_string();
        let entity = row.to_entity();
        assert_eq!(
            entity.status,
            ContentStatus::Other("scheduled".to_string())
        );
        assert_eq!(ContentRow::from_entity(&entity).status, "scheduled");
    }

    #[test]
    fn test_block_data_row_round_trip() {
        let row = sample_data_row(Uuid::new_v4());
        let back = ContentBlockDataRow::from_entity(&row.to_entity());
        assert_eq!(row, back);
    }

    #[test]
    fn test_assemble_orders_blocks_and_attaches_data() {
        let content = sample_content_row();
        let content_id = content.id;

        let make_block = |order: i32| ContentBlockRow {
            id: Uuid::new_v4(),
            content_id,
            block_type: "text".to_string(),
            block_order: order,
            is_visible: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let second = make_block(1);
        let first = make_block(0);
        let data = sample_data_row(first.id);

        let entity = assemble_content(
            content,
            None,
            vec![second.clone(), first.clone()],
            vec![data.clone()],
        );

        assert_eq!(entity.blocks.len(), 2);
        assert_eq!(entity.blocks[0].id, first.id);
        assert_eq!(entity.blocks[1].id, second.id);
        assert_eq!(
            entity.blocks[0].data.as_ref().map(|d| d.id),
            Some(data.id)
        );
        assert!(entity.blocks[1].data.is_none());
        assert!(entity.content_type.is_none());
    }
}

use crate::domain::{
    context::RequestContext,
    entities::{Content, ContentStatus},
    errors::RepositoryResult,
};
use async_trait::async_trait;
use uuid::Uuid;

/// Column a content listing may be ordered by. A closed set so query builders
/// never interpolate caller-supplied strings into SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Title,
    Slug,
    Status,
    CreatedAt,
    UpdatedAt,
    PublishedAt,
}

impl SortField {
    pub fn column(&self) -> &'static str {
        match self {
            SortField::Title => "title",
            SortField::Slug => "slug",
            SortField::Status => "status",
            SortField::CreatedAt => "created_at",
            SortField::UpdatedAt => "updated_at",
            SortField::PublishedAt => "published_at",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "title" => Some(SortField::Title),
            "slug" => Some(SortField::Slug),
            "status" => Some(SortField::Status),
            "created_at" => Some(SortField::CreatedAt),
            "updated_at" => Some(SortField::UpdatedAt),
            "published_at" => Some(SortField::PublishedAt),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "asc" => Some(SortDirection::Asc),
            "desc" => Some(SortDirection::Desc),
            _ => None,
        }
    }
}

/// Filter predicate for content listings. All clauses are ANDed.
#[derive(Debug, Clone, Default)]
pub struct ContentFilter {
    /// Exact status match
    pub status: Option<ContentStatus>,
    /// Exact author reference match
    pub author_id: Option<String>,
    /// Case-insensitive substring match on title or slug
    pub search: Option<String>,
}

/// A content listing request: filter, ordering and page bounds.
#[derive(Debug, Clone, Default)]
pub struct ContentQuery {
    pub filter: ContentFilter,
    /// Defaults to creation time when absent
    pub sort_by: Option<SortField>,
    pub sort_direction: SortDirection,
    pub limit: Option<i64>,
    pub offset: i64,
}

/// One page of a content listing. `total_count` reflects the full filtered
/// set, computed independently of the page bounds.
#[derive(Debug, Clone)]
pub struct ContentPage {
    pub contents: Vec<Content>,
    pub total_count: i64,
}

/// Persistence gateway for the content aggregate. Owns transactional grouping
/// of the multi-row writes (content + blocks + block data).
#[async_trait]
pub trait ContentRepository: Send + Sync + 'static {
    /// Load a content item with its full graph: content type, blocks ordered
    /// by block_order, and each block's data.
    async fn get_by_id(&self, ctx: &RequestContext, id: Uuid) -> RepositoryResult<Content>;

    /// List content items matching the query. The page and the total are two
    /// logically separate reads against the same predicate; under concurrent
    /// writes they may disagree.
    async fn list(&self, ctx: &RequestContext, query: &ContentQuery)
        -> RepositoryResult<ContentPage>;

    /// Validate and persist a new content item with all of its blocks and
    /// block data as one all-or-nothing unit. Identities generated during the
    /// write are propagated back into the returned graph.
    async fn create(&self, ctx: &RequestContext, content: Content) -> RepositoryResult<Content>;

    /// Validate and replace an existing content item. When the entity carries
    /// blocks, the stored block set is replaced in the same unit.
    async fn update(&self, ctx: &RequestContext, content: Content) -> RepositoryResult<()>;

    /// Delete a content item and cascade in dependency order: block data,
    /// then blocks, then the content row itself, as one unit.
    async fn delete(&self, ctx: &RequestContext, id: Uuid) -> RepositoryResult<()>;
}

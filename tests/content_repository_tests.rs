use content_api::{
    BlockType, Content, ContentBlock, ContentBlockData, ContentFilter, ContentQuery,
    ContentRepository, ContentStatus, InMemoryContentRepository, RepositoryError, RequestContext,
    SortDirection, SortField,
};
use uuid::Uuid;

fn draft(title: &str, slug: &str) -> Content {
    Content::new(Uuid::new_v4(), title, slug, "author-1")
}

fn published(title: &str, slug: &str) -> Content {
    let mut content = draft(title, slug);
    content.status = ContentStatus::Published;
    content.published_at = Some(chrono::Utc::now());
    content
}

#[tokio::test]
async fn test_create_assigns_identities_and_preserves_block_order() {
    let repo = InMemoryContentRepository::new();
    let ctx = RequestContext::new();

    let mut content = draft("Hello", "hello");
    // Blocks arrive out of order; storage must return them sorted.
    content.blocks = vec![
        ContentBlock::new(BlockType::Image, 2),
        ContentBlock::new(BlockType::Text, 0).with_data(ContentBlockData::text("hello")),
        ContentBlock::new(BlockType::RichText, 1),
    ];

    let created = repo.create(&ctx, content).await.unwrap();

    assert!(!created.id.is_nil());
    assert_eq!(created.blocks.len(), 3);
    let orders: Vec<i32> = created.blocks.iter().map(|b| b.block_order).collect();
    assert_eq!(orders, vec![0, 1, 2]);

    for block in &created.blocks {
        assert!(!block.id.is_nil());
        assert_eq!(block.content_id, created.id);
    }

    let data = created.blocks[0].data.as_ref().unwrap();
    assert!(!data.id.is_nil());
    assert_eq!(data.block_id, created.blocks[0].id);
    assert_eq!(data.content_text, "hello");

    let fetched = repo.get_by_id(&ctx, created.id).await.unwrap();
    assert_eq!(fetched.blocks.len(), 3);
    assert_eq!(
        fetched.blocks[0].data.as_ref().map(|d| d.content_text.as_str()),
        Some("hello")
    );
}

#[tokio::test]
async fn test_get_unknown_id_is_not_found() {
    let repo = InMemoryContentRepository::new();
    let ctx = RequestContext::new();

    let err = repo.get_by_id(&ctx, Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound { entity: "Content", .. }));
}

#[tokio::test]
async fn test_update_and_delete_unknown_id_are_not_found() {
    let repo = InMemoryContentRepository::new();
    let ctx = RequestContext::new();

    let mut ghost = draft("Ghost", "ghost");
    ghost.id = Uuid::new_v4();
    let err = repo.update(&ctx, ghost).await.unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound { .. }));

    let err = repo.delete(&ctx, Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound { .. }));
}

#[tokio::test]
async fn test_create_rejects_invalid_content_without_persisting() {
    let repo = InMemoryContentRepository::new();
    let ctx = RequestContext::new();

    let mut content = draft("", "no-title");
    content.id = Uuid::new_v4();
    let id = content.id;

    let err = repo.create(&ctx, content).await.unwrap_err();
    assert!(matches!(err, RepositoryError::Validation(_)));

    let err = repo.get_by_id(&ctx, id).await.unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound { .. }));
}

#[tokio::test]
async fn test_slug_conflict_on_create_and_update() {
    let repo = InMemoryContentRepository::new();
    let ctx = RequestContext::new();

    repo.create(&ctx, draft("First", "shared-slug")).await.unwrap();
    let second = repo.create(&ctx, draft("Second", "other-slug")).await.unwrap();

    let err = repo
        .create(&ctx, draft("Third", "shared-slug"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        RepositoryError::Conflict { field: "slug", .. }
    ));

    let mut renamed = second.clone();
    renamed.slug = "shared-slug".to_string();
    let err = repo.update(&ctx, renamed).await.unwrap_err();
    assert!(matches!(
        err,
        RepositoryError::Conflict { field: "slug", .. }
    ));

    // Updating without changing the slug is not a self-conflict.
    repo.update(&ctx, second).await.unwrap();
}

#[tokio::test]
async fn test_list_filters_and_paginates_with_independent_total() {
    let repo = InMemoryContentRepository::new();
    let ctx = RequestContext::new();

    repo.create(&ctx, published("One", "one")).await.unwrap();
    repo.create(&ctx, published("Two", "two")).await.unwrap();
    repo.create(&ctx, draft("Three", "three")).await.unwrap();

    let query = ContentQuery {
        filter: ContentFilter {
            status: Some(ContentStatus::Published),
            ..Default::default()
        },
        sort_by: Some(SortField::Title),
        sort_direction: SortDirection::Asc,
        limit: Some(1),
        offset: 0,
    };

    let page = repo.list(&ctx, &query).await.unwrap();
    assert_eq!(page.contents.len(), 1);
    assert_eq!(page.total_count, 2);
    assert_eq!(page.contents[0].title, "One");

    let next = ContentQuery {
        offset: 1,
        ..query
    };
    let page = repo.list(&ctx, &next).await.unwrap();
    assert_eq!(page.contents.len(), 1);
    assert_eq!(page.contents[0].title, "Two");
}

#[tokio::test]
async fn test_list_search_matches_title_and_slug() {
    let repo = InMemoryContentRepository::new();
    let ctx = RequestContext::new();

    repo.create(&ctx, draft("Rust Guide", "guide")).await.unwrap();
    repo.create(&ctx, draft("Other", "rusty-notes")).await.unwrap();
    repo.create(&ctx, draft("Unrelated", "misc")).await.unwrap();

    let query = ContentQuery {
        filter: ContentFilter {
            search: Some("rust".to_string()),
            ..Default::default()
        },
        ..Default::default()
    };

    let page = repo.list(&ctx, &query).await.unwrap();
    assert_eq!(page.total_count, 2);
}

#[tokio::test]
async fn test_update_with_empty_blocks_keeps_stored_blocks() {
    let repo = InMemoryContentRepository::new();
    let ctx = RequestContext::new();

    let mut content = draft("Hello", "hello");
    content.blocks =
        vec![ContentBlock::new(BlockType::Text, 0).with_data(ContentBlockData::text("keep me"))];
    let created = repo.create(&ctx, content).await.unwrap();

    let mut update = created.clone();
    update.title = "Hello again".to_string();
    update.blocks = Vec::new();
    repo.update(&ctx, update).await.unwrap();

    let fetched = repo.get_by_id(&ctx, created.id).await.unwrap();
    assert_eq!(fetched.title, "Hello again");
    assert_eq!(fetched.blocks.len(), 1);
    assert_eq!(
        fetched.blocks[0].data.as_ref().map(|d| d.content_text.as_str()),
        Some("keep me")
    );
}

#[tokio::test]
async fn test_update_with_blocks_replaces_the_set() {
    let repo = InMemoryContentRepository::new();
    let ctx = RequestContext::new();

    let mut content = draft("Hello", "hello");
    content.blocks = vec![
        ContentBlock::new(BlockType::Text, 0),
        ContentBlock::new(BlockType::Image, 1),
    ];
    let created = repo.create(&ctx, content).await.unwrap();

    let mut update = created.clone();
    update.blocks =
        vec![ContentBlock::new(BlockType::RichText, 0).with_data(ContentBlockData::text("new"))];
    repo.update(&ctx, update).await.unwrap();

    let fetched = repo.get_by_id(&ctx, created.id).await.unwrap();
    assert_eq!(fetched.blocks.len(), 1);
    assert_eq!(fetched.blocks[0].block_type, BlockType::RichText);
}

#[tokio::test]
async fn test_delete_removes_the_whole_graph() {
    let repo = InMemoryContentRepository::new();
    let ctx = RequestContext::new();

    let mut content = draft("Doomed", "doomed");
    content.blocks =
        vec![ContentBlock::new(BlockType::Text, 0).with_data(ContentBlockData::text("bye"))];
    let created = repo.create(&ctx, content).await.unwrap();

    repo.delete(&ctx, created.id).await.unwrap();

    let err = repo.get_by_id(&ctx, created.id).await.unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound { .. }));
}

#[tokio::test]
async fn test_cancelled_context_aborts_operations() {
    let repo = InMemoryContentRepository::new();
    let ctx = RequestContext::new();
    ctx.cancel();

    let err = repo.create(&ctx, draft("Hello", "hello")).await.unwrap_err();
    assert!(matches!(err, RepositoryError::Cancelled));

    let err = repo.list(&ctx, &ContentQuery::default()).await.unwrap_err();
    assert!(matches!(err, RepositoryError::Cancelled));
}

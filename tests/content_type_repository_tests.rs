use content_api::{
    ContentType, ContentTypeRepository, InMemoryContentTypeRepository, RepositoryError,
    RequestContext, ValidationError,
};
use uuid::Uuid;

#[tokio::test]
async fn test_create_and_get_content_type() {
    let repo = InMemoryContentTypeRepository::new();
    let ctx = RequestContext::new();

    let created = repo
        .create(&ctx, ContentType::new("article", "Article", "admin"))
        .await
        .unwrap();

    assert!(!created.id.is_nil());
    assert!(created.is_active);

    let fetched = repo.get_by_id(&ctx, created.id).await.unwrap();
    assert_eq!(fetched.name, "article");
    assert_eq!(fetched.display_name, "Article");
}

#[tokio::test]
async fn test_duplicate_name_is_a_conflict() {
    let repo = InMemoryContentTypeRepository::new();
    let ctx = RequestContext::new();

    repo.create(&ctx, ContentType::new("article", "Article", "admin"))
        .await
        .unwrap();

    let err = repo
        .create(&ctx, ContentType::new("article", "Blog Article", "admin"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        RepositoryError::Conflict {
            entity: "ContentType",
            field: "name",
            ..
        }
    ));
}

#[tokio::test]
async fn test_list_filters_inactive_types() {
    let repo = InMemoryContentTypeRepository::new();
    let ctx = RequestContext::new();

    repo.create(&ctx, ContentType::new("article", "Article", "admin"))
        .await
        .unwrap();
    let mut page = ContentType::new("page", "Page", "admin");
    page.is_active = false;
    repo.create(&ctx, page).await.unwrap();

    let all = repo.list(&ctx, false).await.unwrap();
    assert_eq!(all.len(), 2);

    let active = repo.list(&ctx, true).await.unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].name, "article");
}

#[tokio::test]
async fn test_update_renames_and_rejects_taken_names() {
    let repo = InMemoryContentTypeRepository::new();
    let ctx = RequestContext::new();

    let article = repo
        .create(&ctx, ContentType::new("article", "Article", "admin"))
        .await
        .unwrap();
    repo.create(&ctx, ContentType::new("page", "Page", "admin"))
        .await
        .unwrap();

    let mut renamed = article.clone();
    renamed.display_name = "News Article".to_string();
    repo.update(&ctx, renamed).await.unwrap();

    let fetched = repo.get_by_id(&ctx, article.id).await.unwrap();
    assert_eq!(fetched.display_name, "News Article");

    let mut stolen = fetched.clone();
    stolen.name = "page".to_string();
    let err = repo.update(&ctx, stolen).await.unwrap_err();
    assert!(matches!(err, RepositoryError::Conflict { .. }));
}

#[tokio::test]
async fn test_validation_rejects_empty_fields() {
    let repo = InMemoryContentTypeRepository::new();
    let ctx = RequestContext::new();

    let err = repo
        .create(&ctx, ContentType::new("", "Article", "admin"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        RepositoryError::Validation(ValidationError::EmptyTypeName)
    ));

    let err = repo
        .create(&ctx, ContentType::new("article", "", "admin"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        RepositoryError::Validation(ValidationError::EmptyDisplayName)
    ));
}

#[tokio::test]
async fn test_delete_unknown_id_is_not_found() {
    let repo = InMemoryContentTypeRepository::new();
    let ctx = RequestContext::new();

    let err = repo.delete(&ctx, Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound { .. }));
}

use axum_test::TestServer;
use content_api::{
    InMemoryArticleRepository, InMemoryContentRepository, InMemoryContentTypeRepository,
    adapters::inbound::http::router::{AppState, create_router},
    services::ContentServiceImpl,
};
use serde_json::{Value, json};
use std::sync::Arc;

async fn setup_test_server() -> TestServer {
    let contents = Arc::new(InMemoryContentRepository::new());
    let content_types = Arc::new(InMemoryContentTypeRepository::new());
    let articles = Arc::new(InMemoryArticleRepository::with_sample_data().await);

    let state = AppState {
        content_service: Arc::new(ContentServiceImpl::new(contents, content_types, articles)),
        db_pool: None,
    };

    TestServer::new(create_router(state)).unwrap()
}

#[tokio::test]
async fn test_root_lists_contents_as_array() {
    let server = setup_test_server().await;

    let response = server.get("/").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_healthcheck_without_database_is_ok() {
    let server = setup_test_server().await;

    let response = server.get("/healthcheck").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "ok");
    assert!(body.get("database").is_none());
}

#[tokio::test]
async fn test_content_crud_over_http() {
    let server = setup_test_server().await;

    // Create a content type first so the content has something to reference.
    let response = server
        .post("/content-types")
        .json(&json!({
            "name": "article",
            "display_name": "Article",
            "created_by": "admin"
        }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    let content_type: Value = response.json();
    let content_type_id = content_type["id"].as_str().unwrap().to_string();

    // Create a content item with one text block.
    let response = server
        .post("/contents")
        .json(&json!({
            "content_type_id": content_type_id,
            "title": "Hello World",
            "slug": "hello-world",
            "status": "published",
            "author_id": "author-1",
            "blocks": [
                {
                    "block_type": "text",
                    "block_order": 0,
                    "data": { "data_type": "text", "content_text": "First paragraph" }
                }
            ]
        }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    let created: Value = response.json();
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["slug"], "hello-world");
    assert_eq!(created["blocks"][0]["data"]["content_text"], "First paragraph");

    // Fetch it back.
    let response = server.get(&format!("/contents/{}", id)).await;
    response.assert_status_ok();
    let fetched: Value = response.json();
    assert_eq!(fetched["title"], "Hello World");

    // List with a status filter.
    let response = server.get("/contents?status=published&limit=10").await;
    response.assert_status_ok();
    let page: Value = response.json();
    assert_eq!(page["total_count"], 1);
    assert_eq!(page["contents"].as_array().unwrap().len(), 1);

    // Update the title.
    let response = server
        .put(&format!("/contents/{}", id))
        .json(&json!({
            "content_type_id": content_type_id,
            "title": "Hello Again",
            "slug": "hello-world",
            "status": "published",
            "author_id": "author-1"
        }))
        .await;
    response.assert_status_ok();

    let response = server.get(&format!("/contents/{}", id)).await;
    let fetched: Value = response.json();
    assert_eq!(fetched["title"], "Hello Again");
    // Omitted blocks leave the stored set untouched.
    assert_eq!(fetched["blocks"].as_array().unwrap().len(), 1);

    // Delete and confirm it is gone.
    let response = server.delete(&format!("/contents/{}", id)).await;
    response.assert_status_ok();

    let response = server.get(&format!("/contents/{}", id)).await;
    response.assert_status(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_service_errors_collapse_to_500_with_error_body() {
    let server = setup_test_server().await;

    let response = server
        .get(&format!("/contents/{}", uuid::Uuid::new_v4()))
        .await;
    response.assert_status(axum::http::StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn test_create_content_with_missing_title_reports_validation_error() {
    let server = setup_test_server().await;

    let response = server
        .post("/contents")
        .json(&json!({
            "content_type_id": uuid::Uuid::new_v4(),
            "title": "",
            "slug": "empty",
            "author_id": "author-1"
        }))
        .await;
    response.assert_status(axum::http::StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("Title"));
}

#[tokio::test]
async fn test_list_articles_returns_seeded_set() {
    let server = setup_test_server().await;

    let response = server.get("/articles").await;
    response.assert_status_ok();

    let articles: Value = response.json();
    let articles = articles.as_array().unwrap();
    assert_eq!(articles.len(), 2);
    assert_eq!(articles[0]["title"], "Welcome");
    assert_eq!(articles[1]["title"], "Roadmap");
}

#[tokio::test]
async fn test_content_type_listing_respects_active_only() {
    let server = setup_test_server().await;

    server
        .post("/content-types")
        .json(&json!({
            "name": "article",
            "display_name": "Article",
            "created_by": "admin"
        }))
        .await
        .assert_status(axum::http::StatusCode::CREATED);

    let response = server
        .post("/content-types")
        .json(&json!({
            "name": "article",
            "display_name": "Duplicate",
            "created_by": "admin"
        }))
        .await;
    response.assert_status(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("already exists"));

    let response = server.get("/content-types?active_only=true").await;
    response.assert_status_ok();
    let types: Value = response.json();
    assert_eq!(types.as_array().unwrap().len(), 1);
}

use async_trait::async_trait;
use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::delete_item::DeleteItemError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use chrono::Utc;
use std::fmt::Debug;
use uuid::Uuid;

use crate::{
    domain::{
        context::RequestContext,
        entities::Article,
        errors::{RepositoryError, RepositoryResult},
    },
    ports::repositories::ArticleRepository,
};

use super::conversions::{article_to_item, item_to_article};
use super::keys;

/// DynamoDB implementation of ArticleRepository over a single-table layout.
///
/// Writes are per-item puts guarded by condition expressions; there is no
/// multi-item transaction. Listing is one GSI1 query in sort-key order, which
/// is publication order.
#[derive(Clone)]
pub struct DynamoDbArticleRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbArticleRepository {
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

fn storage_error(context: &str, err: impl Debug) -> RepositoryError {
    RepositoryError::Storage {
        message: format!("DynamoDB error {}: {:?}", context, err),
        source: Some(format!("{:?}", err)),
    }
}

fn map_put_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
    on_condition_failure: RepositoryError,
) -> RepositoryError {
    match err.into_service_error() {
        PutItemError::ConditionalCheckFailedException(_) => on_condition_failure,
        err => storage_error("putting item", err),
    }
}

#[async_trait]
impl ArticleRepository for DynamoDbArticleRepository {
    async fn list_articles(&self, ctx: &RequestContext) -> RepositoryResult<Vec<Article>> {
        ctx.ensure_active()?;

        let result = self
            .client
            .query()
            .table_name(&self.table_name)
            .index_name("GSI1")
            .key_condition_expression("GSI1PK = :pk")
            .expression_attribute_values(
                ":pk",
                AttributeValue::S(keys::ARTICLE_GSI1_PARTITION.to_string()),
            )
            .send()
            .await
            .map_err(|e| storage_error("querying articles", e))?;

        let items = result.items.unwrap_or_default();
        items.iter().map(item_to_article).collect()
    }

    async fn get_article(&self, ctx: &RequestContext, id: Uuid) -> RepositoryResult<Article> {
        ctx.ensure_active()?;

        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("PK", AttributeValue::S(keys::article_pk(id)))
            .key("SK", AttributeValue::S(keys::article_sk(id)))
            .send()
            .await
            .map_err(|e| storage_error("fetching article", e))?;

        match result.item {
            Some(item) => item_to_article(&item),
            None => Err(RepositoryError::not_found("Article", id)),
        }
    }

    async fn create_article(
        &self,
        ctx: &RequestContext,
        article: Article,
    ) -> RepositoryResult<Article> {
        ctx.ensure_active()?;

        let mut article = article;
        if article.id.is_nil() {
            article.id = Uuid::new_v4();
        }
        article.updated_at = Utc::now();

        let conflict = RepositoryError::Conflict {
            entity: "Article",
            field: "id",
            value: article.id.to_string(),
        };

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(article_to_item(&article)))
            .condition_expression("attribute_not_exists(PK)")
            .send()
            .await
            .map_err(|e| map_put_error(e, conflict))?;

        Ok(article)
    }

    async fn update_article(
        &self,
        ctx: &RequestContext,
        article: Article,
    ) -> RepositoryResult<()> {
        ctx.ensure_active()?;

        let mut article = article;
        article.updated_at = Utc::now();

        let not_found = RepositoryError::not_found("Article", article.id);

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(article_to_item(&article)))
            .condition_expression("attribute_exists(PK)")
            .send()
            .await
            .map_err(|e| map_put_error(e, not_found))?;

        Ok(())
    }

    async fn delete_article(&self, ctx: &RequestContext, id: Uuid) -> RepositoryResult<()> {
        ctx.ensure_active()?;

        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key("PK", AttributeValue::S(keys::article_pk(id)))
            .key("SK", AttributeValue::S(keys::article_sk(id)))
            .condition_expression("attribute_exists(PK)")
            .send()
            .await
            .map_err(|e| match e.into_service_error() {
                DeleteItemError::ConditionalCheckFailedException(_) => {
                    RepositoryError::not_found("Article", id)
                }
                err => storage_error("deleting article", err),
            })?;

        Ok(())
    }
}

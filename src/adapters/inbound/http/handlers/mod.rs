use std::time::Duration;

use crate::domain::context::RequestContext;

mod article_handlers;
mod content_handlers;
mod content_type_handlers;
mod health_handlers;

pub use article_handlers::list_articles;
pub use content_handlers::{
    create_content, delete_content, get_content, index, list_contents, update_content,
};
pub use content_type_handlers::{
    create_content_type, delete_content_type, get_content_type, list_content_types,
    update_content_type,
};
pub use health_handlers::healthcheck;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Execution context for one request. Repository calls check it between
/// store operations and bail out once the deadline passes.
fn request_context() -> RequestContext {
    RequestContext::new().with_timeout(REQUEST_TIMEOUT)
}

pub mod context;
pub mod entities;
pub mod errors;

// Re-export commonly used types
pub use context::RequestContext;
pub use entities::*;
pub use errors::{RepositoryError, RepositoryResult, ValidationError};

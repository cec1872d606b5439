use super::ValidationError;

/// Errors returned by repository operations. Every backend fault is converted
/// to this taxonomy at the repository boundary; callers never see a raw driver
/// error.
#[derive(Debug, Clone)]
pub enum RepositoryError {
    /// Malformed or missing required field; the caller's fault, never retried
    Validation(ValidationError),

    /// Identity does not resolve to a stored row
    NotFound { entity: &'static str, id: String },

    /// Uniqueness violation on a constrained field
    Conflict {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    /// I/O, connectivity or transaction failure; possibly transient, no
    /// automatic retry is performed
    Storage {
        message: String,
        source: Option<String>, // Store error as string to allow Clone
    },

    /// The request's execution context was cancelled or its deadline passed
    Cancelled,
}

impl RepositoryError {
    pub fn storage(message: impl Into<String>) -> Self {
        RepositoryError::Storage {
            message: message.into(),
            source: None,
        }
    }

    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        RepositoryError::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

impl std::fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RepositoryError::Validation(e) => write!(f, "Validation error: {}", e),
            RepositoryError::NotFound { entity, id } => {
                write!(f, "{} not found: {}", entity, id)
            }
            RepositoryError::Conflict {
                entity,
                field,
                value,
            } => {
                write!(f, "{} with {} '{}' already exists", entity, field, value)
            }
            RepositoryError::Storage { message, .. } => {
                write!(f, "Storage error: {}", message)
            }
            RepositoryError::Cancelled => write!(f, "Operation cancelled"),
        }
    }
}

impl std::error::Error for RepositoryError {}

impl From<ValidationError> for RepositoryError {
    fn from(e: ValidationError) -> Self {
        RepositoryError::Validation(e)
    }
}

/// Result type for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

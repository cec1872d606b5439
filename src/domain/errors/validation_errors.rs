/// Field-level validation errors for domain entities
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    // Content validation errors
    EmptyTitle,
    EmptySlug,
    EmptyAuthorId,
    MissingContentTypeId,

    // ContentType validation errors
    EmptyTypeName,
    EmptyDisplayName,
    EmptyCreatedBy,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::EmptyTitle => write!(f, "Title is required"),
            ValidationError::EmptySlug => write!(f, "Slug is required"),
            ValidationError::EmptyAuthorId => write!(f, "Author ID is required"),
            ValidationError::MissingContentTypeId => {
                write!(f, "Content type ID is required")
            }
            ValidationError::EmptyTypeName => write!(f, "Content type name is required"),
            ValidationError::EmptyDisplayName => write!(f, "Display name is required"),
            ValidationError::EmptyCreatedBy => write!(f, "Creator is required"),
        }
    }
}

impl std::error::Error for ValidationError {}

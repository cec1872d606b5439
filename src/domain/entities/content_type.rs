use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::errors::ValidationError;

/// A named kind of content (e.g. "article", "page"). Referenced by content
/// items, never owned by them. Names are unique across all content types.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentType {
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

impl ContentType {
    pub fn new(
        name: impl Into<String>,
        display_name: impl Into<String>,
        created_by: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::nil(),
            name: name.into(),
            display_name: display_name.into(),
            description: String::new(),
            icon: String::new(),
            is_active: true,
            created_at: now,
            updated_at: now,
            created_by: created_by.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyTypeName);
        }
        if self.display_name.is_empty() {
            return Err(ValidationError::EmptyDisplayName);
        }
        if self.created_by.is_empty() {
            return Err(ValidationError::EmptyCreatedBy);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_complete_type() {
        let ct = ContentType::new("article", "Article", "u1");
        assert!(ct.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_fields() {
        let mut ct = ContentType::new("article", "Article", "u1");
        ct.name = String::new();
        assert_eq!(ct.validate(), Err(ValidationError::EmptyTypeName));

        let mut ct = ContentType::new("article", "Article", "u1");
        ct.display_name = String::new();
        assert_eq!(ct.validate(), Err(ValidationError::EmptyDisplayName));

        let mut ct = ContentType::new("article", "Article", "u1");
        ct.created_by = String::new();
        assert_eq!(ct.validate(), Err(ValidationError::EmptyCreatedBy));
    }
}

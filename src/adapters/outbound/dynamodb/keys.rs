//! Key generation for the single-table article layout.
//!
//! Pure functions, no side effects. Articles are stored under
//! `ARTICLE#<id>` / `ARTICLE#<id>` and indexed on GSI1 under a shared
//! partition with a time-ordered sort key so one query returns the full set
//! in publication order.

use chrono::{DateTime, SecondsFormat, Utc};
use uuid::Uuid;

pub const ARTICLE_PREFIX: &str = "ARTICLE#";

/// Shared GSI1 partition holding every article.
pub const ARTICLE_GSI1_PARTITION: &str = "ARTICLE";

/// Pattern: `ARTICLE#<article_id>`
pub fn article_pk(article_id: Uuid) -> String {
    format!("{ARTICLE_PREFIX}{article_id}")
}

/// Pattern: `ARTICLE#<article_id>` (same as PK for single-item lookups)
pub fn article_sk(article_id: Uuid) -> String {
    format!("{ARTICLE_PREFIX}{article_id}")
}

/// Pattern: `ARTICLE#<published_at>#<article_id>`
///
/// The timestamp is RFC 3339 in UTC so lexicographic order matches
/// chronological order; the id suffix breaks ties.
pub fn article_gsi1_sk(published_at: DateTime<Utc>, article_id: Uuid) -> String {
    format!(
        "{ARTICLE_PREFIX}{}#{article_id}",
        published_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_article_pk() {
        let id = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440001").unwrap();
        assert_eq!(
            article_pk(id),
            "ARTICLE#550e8400-e29b-41d4-a716-446655440001"
        );
        assert_eq!(article_sk(id), article_pk(id));
    }

    #[test]
    fn test_article_gsi1_sk() {
        let id = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440001").unwrap();
        let at = Utc.with_ymd_and_hms(2024, 6, 15, 12, 30, 0).unwrap();
        assert_eq!(
            article_gsi1_sk(at, id),
            "ARTICLE#2024-06-15T12:30:00Z#550e8400-e29b-41d4-a716-446655440001"
        );
    }

    #[test]
    fn test_gsi1_sk_sorts_chronologically() {
        let id = Uuid::nil();
        let earlier = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2024, 12, 31, 23, 59, 59).unwrap();
        assert!(article_gsi1_sk(earlier, id) < article_gsi1_sk(later, id));
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct Content {
    pub html: String,
    pub markdown: String,
}

/// A content item as the platform stores it. Posts are seeded by the
/// platform; this service only reads them to estimate reading time.
#[derive(Debug, Serialize, Deserialize)]
pub struct Post {
    pub title: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub updated_at: DateTime<Utc>,
    pub content: Content,
    #[serde(default)]
    pub excerpt: Option<String>,
}

/// Which part of the post the estimate is computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentSource {
    Content,
    Excerpt,
}

impl ContentSource {
    /// `?source=excerpt` selects the excerpt, anything else falls back to the
    /// full content.
    pub fn from_query(value: Option<&str>) -> ContentSource {
        match value {
            Some("excerpt") => ContentSource::Excerpt,
            _ => ContentSource::Content,
        }
    }
}

impl Post {
    pub fn text_to_estimate(&self, source: ContentSource) -> &str {
        match source {
            ContentSource::Content => &self.content.html,
            ContentSource::Excerpt => self.excerpt.as_deref().unwrap_or(""),
        }
    }
}

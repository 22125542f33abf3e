use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::article::ArticleId;

/// Unique identifier for comments
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommentId(pub String);

impl CommentId {
    pub fn generate() -> Self {
        CommentId(Uuid::new_v4().to_string())
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A reader-submitted note attached to one article.
///
/// `article_id` is an unenforced reference; comments whose article is gone
/// are simply never returned by queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub article_id: ArticleId,
    pub name: String,
    pub email: String,
    pub content: String,
    /// Assigned by the content store at creation, immutable afterwards
    pub created_at: DateTime<Utc>,
}

/// Reader input for a new comment; id and timestamp come from the store
#[derive(Debug, Clone, PartialEq)]
pub struct CommentDraft {
    pub article_id: ArticleId,
    pub name: String,
    pub email: String,
    pub content: String,
}

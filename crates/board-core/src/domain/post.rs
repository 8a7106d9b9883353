use std::fmt;

use chrono::{DateTime, Utc};

use crate::error::DomainError;

/// Identifier assigned to a post by the repository.
pub type PostId = i64;

/// Post entity - a single board post, including its ownership password.
///
/// Deliberately not `Serialize`: posts leave the service only through
/// [`PostSummary`](super::PostSummary) or [`PostDetail`](super::PostDetail).
#[derive(Clone, PartialEq, Eq)]
pub struct Post {
    pub post_id: PostId,
    pub nickname: String,
    pub password: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Check the supplied password against the stored one.
    pub fn verify_password(&self, candidate: &str) -> Result<(), DomainError> {
        if self.password == candidate {
            Ok(())
        } else {
            Err(DomainError::PasswordMismatch {
                post_id: self.post_id,
            })
        }
    }
}

impl fmt::Debug for Post {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Post")
            .field("post_id", &self.post_id)
            .field("nickname", &self.nickname)
            .field("password", &"***")
            .field("title", &self.title)
            .field("content", &self.content)
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}

/// Fields supplied when creating a post. Identifier and timestamps are
/// assigned by the repository.
#[derive(Clone, PartialEq, Eq)]
pub struct NewPost {
    pub nickname: String,
    pub password: String,
    pub title: String,
    pub content: String,
}

impl fmt::Debug for NewPost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewPost")
            .field("nickname", &self.nickname)
            .field("password", &"***")
            .field("title", &self.title)
            .field("content", &self.content)
            .finish()
    }
}

/// Mutable fields of a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostChanges {
    pub title: String,
    pub content: String,
}

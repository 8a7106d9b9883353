//! Domain-level error types.

use thiserror::Error;

use crate::domain::PostId;

/// Message for a post that does not exist, whichever layer noticed.
pub const POST_NOT_FOUND: &str = "존재하지 않는 게시글입니다.";

/// Domain errors - business rule failures.
///
/// The display strings are the user-facing messages and are rendered as-is
/// in HTTP error bodies.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{}", POST_NOT_FOUND)]
    NotFound { post_id: PostId },

    #[error("비밀번호가 일치하지 않습니다.")]
    PasswordMismatch { post_id: PostId },

    #[error("Params가 유효하지 않습니다.")]
    InvalidInput,

    #[error(transparent)]
    Repository(#[from] RepoError),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,
}

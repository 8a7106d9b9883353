use async_trait::async_trait;

use crate::domain::{NewPost, Post, PostChanges, PostId};
use crate::error::RepoError;

/// Post storage. Implementations perform no business rules beyond what
/// their own queries express.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Fetch every stored post.
    async fn find_all(&self) -> Result<Vec<Post>, RepoError>;

    /// Find a post by its identifier.
    async fn find_by_id(&self, post_id: PostId) -> Result<Option<Post>, RepoError>;

    /// Insert a post, assigning its identifier and both timestamps.
    async fn create(&self, post: NewPost) -> Result<Post, RepoError>;

    /// Replace title and content of the post matching `post_id` and
    /// `password`, refreshing `updated_at`.
    async fn update(
        &self,
        post_id: PostId,
        password: &str,
        changes: PostChanges,
    ) -> Result<Post, RepoError>;

    /// Remove the post matching `post_id` and `password`.
    async fn delete(&self, post_id: PostId, password: &str) -> Result<(), RepoError>;
}

use std::sync::Arc;

use tracing::instrument;

use crate::domain::{NewPost, Post, PostChanges, PostDetail, PostId, PostSummary};
use crate::error::DomainError;
use crate::ports::PostRepository;

/// Posts service - the only holder of board business rules.
///
/// Update and delete run `find -> verify password -> mutate`; the mutating
/// repository call is unreachable unless both checks passed.
#[derive(Clone)]
pub struct PostService {
    repo: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    /// All posts, newest first.
    #[instrument(skip(self))]
    pub async fn find_all_posts(&self) -> Result<Vec<PostSummary>, DomainError> {
        let mut posts = self.repo.find_all().await?;
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(posts.into_iter().map(PostSummary::from_post).collect())
    }

    #[instrument(skip(self))]
    pub async fn find_post_by_id(&self, post_id: PostId) -> Result<PostDetail, DomainError> {
        let post = self.find_existing(post_id).await?;
        Ok(PostDetail::from_post(post))
    }

    #[instrument(skip_all, fields(nickname = %new_post.nickname))]
    pub async fn create_post(&self, new_post: NewPost) -> Result<PostDetail, DomainError> {
        let post = self.repo.create(new_post).await?;
        tracing::info!(post_id = post.post_id, "Post created");

        Ok(PostDetail::from_post(post))
    }

    #[instrument(skip(self, password, changes))]
    pub async fn update_post(
        &self,
        post_id: PostId,
        password: &str,
        changes: PostChanges,
    ) -> Result<PostDetail, DomainError> {
        self.find_owned(post_id, password).await?;

        let post = self.repo.update(post_id, password, changes).await?;
        tracing::info!("Post updated");

        Ok(PostDetail::from_post(post))
    }

    /// Deletes the post and returns its last state.
    #[instrument(skip(self, password))]
    pub async fn delete_post(
        &self,
        post_id: PostId,
        password: &str,
    ) -> Result<PostDetail, DomainError> {
        let post = self.find_owned(post_id, password).await?;

        self.repo.delete(post_id, password).await?;
        tracing::info!("Post deleted");

        Ok(PostDetail::from_post(post))
    }

    async fn find_existing(&self, post_id: PostId) -> Result<Post, DomainError> {
        self.repo
            .find_by_id(post_id)
            .await?
            .ok_or(DomainError::NotFound { post_id })
    }

    async fn find_owned(&self, post_id: PostId, password: &str) -> Result<Post, DomainError> {
        let post = self.find_existing(post_id).await?;
        if let Err(e) = post.verify_password(password) {
            tracing::warn!(post_id, "Password mismatch");
            return Err(e);
        }
        Ok(post)
    }
}

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use board_core::domain::{NewPost, Post, PostChanges, PostId};
use board_core::error::RepoError;
use board_core::ports::PostRepository;

struct Store {
    next_id: PostId,
    posts: BTreeMap<PostId, Post>,
}

/// In-memory post repository backed by a `BTreeMap` under an async RwLock.
///
/// Identifiers start at 1 and are never reused. Data is lost on process
/// restart.
pub struct InMemoryPostRepository {
    store: RwLock<Store>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store {
                next_id: 1,
                posts: BTreeMap::new(),
            }),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn owned<'a>(
    posts: &'a mut BTreeMap<PostId, Post>,
    post_id: PostId,
    password: &str,
) -> Result<&'a mut Post, RepoError> {
    posts
        .get_mut(&post_id)
        .filter(|post| post.password == password)
        .ok_or(RepoError::NotFound)
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.posts.values().cloned().collect())
    }

    async fn find_by_id(&self, post_id: PostId) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.posts.get(&post_id).cloned())
    }

    async fn create(&self, new_post: NewPost) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;

        let post_id = store.next_id;
        store.next_id += 1;

        let now = Utc::now();
        let post = Post {
            post_id,
            nickname: new_post.nickname,
            password: new_post.password,
            title: new_post.title,
            content: new_post.content,
            created_at: now,
            updated_at: now,
        };
        store.posts.insert(post_id, post.clone());

        Ok(post)
    }

    async fn update(
        &self,
        post_id: PostId,
        password: &str,
        changes: PostChanges,
    ) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        let post = owned(&mut store.posts, post_id, password)?;

        post.title = changes.title;
        post.content = changes.content;
        // Clock skew must not break updated_at >= created_at.
        post.updated_at = Utc::now().max(post.created_at);

        Ok(post.clone())
    }

    async fn delete(&self, post_id: PostId, password: &str) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        owned(&mut store.posts, post_id, password)?;
        store.posts.remove(&post_id);
        Ok(())
    }
}

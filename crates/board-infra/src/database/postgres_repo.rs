//! PostgreSQL repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Select, Set,
};

use board_core::domain::{NewPost, Post, PostChanges, PostId};
use board_core::error::RepoError;
use board_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};

/// PostgreSQL post repository.
///
/// Update and delete are single statements filtered on both id and password,
/// so a write can only touch a row whose password still matches at
/// execution time. No matching row is reported as `RepoError::NotFound`.
pub struct PostgresPostRepository {
    db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

/// Listing query, newest first.
pub(crate) fn all_posts_query() -> Select<PostEntity> {
    PostEntity::find().order_by_desc(post::Column::CreatedAt)
}

pub(crate) fn query_error(e: DbErr) -> RepoError {
    match e {
        DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => RepoError::NotFound,
        DbErr::Conn(err) => RepoError::Connection(err.to_string()),
        DbErr::ConnectionAcquire(err) => RepoError::Connection(err.to_string()),
        other => RepoError::Query(other.to_string()),
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let result = all_posts_query()
            .all(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, post_id: PostId) -> Result<Option<Post>, RepoError> {
        let result = PostEntity::find_by_id(post_id)
            .one(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.map(Into::into))
    }

    async fn create(&self, new_post: NewPost) -> Result<Post, RepoError> {
        let now = Utc::now();
        let model = post::ActiveModel {
            post_id: NotSet,
            nickname: Set(new_post.nickname),
            password: Set(new_post.password),
            title: Set(new_post.title),
            content: Set(new_post.content),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
        .insert(&self.db)
        .await
        .map_err(query_error)?;

        tracing::debug!(post_id = model.post_id, "Inserted post row");
        Ok(model.into())
    }

    async fn update(
        &self,
        post_id: PostId,
        password: &str,
        changes: PostChanges,
    ) -> Result<Post, RepoError> {
        let updated = PostEntity::update_many()
            .col_expr(post::Column::Title, Expr::value(changes.title))
            .col_expr(post::Column::Content, Expr::value(changes.content))
            .col_expr(
                post::Column::UpdatedAt,
                Expr::value(DateTimeWithTimeZone::from(Utc::now())),
            )
            .filter(post::Column::PostId.eq(post_id))
            .filter(post::Column::Password.eq(password))
            .exec_with_returning(&self.db)
            .await
            .map_err(query_error)?;

        let model = updated.into_iter().next().ok_or(RepoError::NotFound)?;
        Ok(model.into())
    }

    async fn delete(&self, post_id: PostId, password: &str) -> Result<(), RepoError> {
        let result = PostEntity::delete_many()
            .filter(post::Column::PostId.eq(post_id))
            .filter(post::Column::Password.eq(password))
            .exec(&self.db)
            .await
            .map_err(query_error)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}

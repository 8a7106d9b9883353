//! Create `posts` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(posts_table()).await?;

        // Listing sorts newest first
        manager
            .create_index(
                Index::create()
                    .name("idx_posts_created_at")
                    .table(Posts::Table)
                    .col(Posts::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Posts::Table).to_owned())
            .await
    }
}

/// Text columns carry no length limit; the API only checks presence.
fn posts_table() -> TableCreateStatement {
    Table::create()
        .table(Posts::Table)
        .if_not_exists()
        .col(big_integer(Posts::PostId).auto_increment().primary_key())
        .col(string(Posts::Nickname))
        .col(string(Posts::Password))
        .col(string(Posts::Title))
        .col(text(Posts::Content))
        .col(timestamp_with_time_zone(Posts::CreatedAt))
        .col(timestamp_with_time_zone(Posts::UpdatedAt))
        .to_owned()
}

#[derive(DeriveIden)]
enum Posts {
    Table,
    PostId,
    Nickname,
    Password,
    Title,
    Content,
    CreatedAt,
    UpdatedAt,
}

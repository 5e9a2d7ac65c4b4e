//! Create `git_ssh_key` table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GitSshKey::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GitSshKey::UserId)
                            .string_len(32)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(GitSshKey::PublicKey).text().not_null())
                    .col(ColumnDef::new(GitSshKey::PrivateKey).text().not_null())
                    .col(
                        ColumnDef::new(GitSshKey::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(GitSshKey::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_git_ssh_key_user")
                            .from(GitSshKey::Table, GitSshKey::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GitSshKey::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum GitSshKey {
    Table,
    UserId,
    PublicKey,
    PrivateKey,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum User {
    Table,
    Id,
}

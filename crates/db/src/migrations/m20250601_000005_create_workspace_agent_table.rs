//! Create `workspace_agent` table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WorkspaceAgent::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WorkspaceAgent::Id)
                            .string_len(32)
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(WorkspaceAgent::ResourceId)
                            .string_len(32)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WorkspaceAgent::Name)
                            .string_len(128)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WorkspaceAgent::Token)
                            .string_len(64)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WorkspaceAgent::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_workspace_agent_resource")
                            .from(WorkspaceAgent::Table, WorkspaceAgent::ResourceId)
                            .to(WorkspaceResource::Table, WorkspaceResource::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Unique index: token (agent session authentication)
        manager
            .create_index(
                Index::create()
                    .name("idx_workspace_agent_token")
                    .table(WorkspaceAgent::Table)
                    .col(WorkspaceAgent::Token)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WorkspaceAgent::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum WorkspaceAgent {
    Table,
    Id,
    ResourceId,
    Name,
    Token,
    CreatedAt,
}

#[derive(Iden)]
enum WorkspaceResource {
    Table,
    Id,
}

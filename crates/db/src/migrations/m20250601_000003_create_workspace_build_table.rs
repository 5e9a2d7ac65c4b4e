//! Create `workspace_build` table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WorkspaceBuild::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WorkspaceBuild::Id)
                            .string_len(32)
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(WorkspaceBuild::WorkspaceId)
                            .string_len(32)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WorkspaceBuild::JobId)
                            .string_len(32)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WorkspaceBuild::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_workspace_build_workspace")
                            .from(WorkspaceBuild::Table, WorkspaceBuild::WorkspaceId)
                            .to(Workspace::Table, Workspace::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Unique index: job_id (agent resolution looks builds up by job)
        manager
            .create_index(
                Index::create()
                    .name("idx_workspace_build_job_id")
                    .table(WorkspaceBuild::Table)
                    .col(WorkspaceBuild::JobId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WorkspaceBuild::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum WorkspaceBuild {
    Table,
    Id,
    WorkspaceId,
    JobId,
    CreatedAt,
}

#[derive(Iden)]
enum Workspace {
    Table,
    Id,
}

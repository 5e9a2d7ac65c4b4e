//! Create `workspace_resource` table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WorkspaceResource::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WorkspaceResource::Id)
                            .string_len(32)
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(WorkspaceResource::JobId)
                            .string_len(32)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WorkspaceResource::Name)
                            .string_len(128)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WorkspaceResource::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Index: job_id (resources of one provisioner job)
        manager
            .create_index(
                Index::create()
                    .name("idx_workspace_resource_job_id")
                    .table(WorkspaceResource::Table)
                    .col(WorkspaceResource::JobId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WorkspaceResource::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum WorkspaceResource {
    Table,
    Id,
    JobId,
    Name,
    CreatedAt,
}

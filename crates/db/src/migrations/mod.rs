//! Database migrations.
//!
//! Schema migrations for the database.

#![allow(missing_docs)]

use sea_orm_migration::prelude::*;

mod m20250601_000001_create_user_table;
mod m20250601_000002_create_workspace_table;
mod m20250601_000003_create_workspace_build_table;
mod m20250601_000004_create_workspace_resource_table;
mod m20250601_000005_create_workspace_agent_table;
mod m20250601_000006_create_git_ssh_key_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_user_table::Migration),
            Box::new(m20250601_000002_create_workspace_table::Migration),
            Box::new(m20250601_000003_create_workspace_build_table::Migration),
            Box::new(m20250601_000004_create_workspace_resource_table::Migration),
            Box::new(m20250601_000005_create_workspace_agent_table::Migration),
            Box::new(m20250601_000006_create_git_ssh_key_table::Migration),
        ]
    }
}

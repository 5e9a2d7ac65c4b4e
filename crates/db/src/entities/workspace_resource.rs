//! Workspace resource entity.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// An infrastructure resource provisioned for a workspace build (a VM, a
/// container, ...). Agents run inside resources.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "workspace_resource")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    /// Provisioner job this resource belongs to
    pub job_id: String,

    pub name: String,

    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::workspace_agent::Entity")]
    WorkspaceAgent,
}

impl Related<super::workspace_agent::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WorkspaceAgent.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

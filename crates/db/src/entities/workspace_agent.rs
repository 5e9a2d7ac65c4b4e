//! Workspace agent entity.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// The execution agent running inside a workspace resource. Agents hold
/// their own session token, distinct from any user token, and act on
/// behalf of the workspace owner.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "workspace_agent")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    pub resource_id: String,

    pub name: String,

    /// Agent session token
    #[sea_orm(unique)]
    pub token: String,

    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::workspace_resource::Entity",
        from = "Column::ResourceId",
        to = "super::workspace_resource::Column::Id",
        on_delete = "Cascade"
    )]
    WorkspaceResource,
}

impl Related<super::workspace_resource::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WorkspaceResource.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

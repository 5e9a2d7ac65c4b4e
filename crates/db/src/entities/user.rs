//! User entity.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    #[sea_orm(unique)]
    pub username: String,

    /// Session token for API authentication
    #[sea_orm(unique, nullable)]
    pub token: Option<String>,

    /// Operator-tier users may act on other users' private resources
    #[sea_orm(default_value = false)]
    pub is_operator: bool,

    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::git_ssh_key::Entity")]
    GitSshKey,
    #[sea_orm(has_many = "super::workspace::Entity")]
    Workspace,
}

impl Related<super::git_ssh_key::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GitSshKey.def()
    }
}

impl Related<super::workspace::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Workspace.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

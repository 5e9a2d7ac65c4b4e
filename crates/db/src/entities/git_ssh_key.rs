//! Git SSH key entity.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Git SSH keypair for outbound git operations from a user's workspaces.
/// Each user has exactly one current keypair; regeneration replaces it in
/// place and keeps no history.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "git_ssh_key")]
pub struct Model {
    /// Same as user.id (1:1 relationship)
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: String,

    /// Public key (`authorized_keys` format)
    #[sea_orm(column_type = "Text")]
    pub public_key: String,

    /// Private key (OpenSSH private key format); disclosed only to the
    /// owner's workspace agents
    #[sea_orm(column_type = "Text")]
    pub private_key: String,

    /// First issuance time; untouched by regeneration
    pub created_at: DateTimeWithTimeZone,

    /// Last (re)generation time
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

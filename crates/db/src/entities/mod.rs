//! Database entities.

pub mod git_ssh_key;
pub mod user;
pub mod workspace;
pub mod workspace_agent;
pub mod workspace_build;
pub mod workspace_resource;

pub use git_ssh_key::Entity as GitSshKey;
pub use user::Entity as User;
pub use workspace::Entity as Workspace;
pub use workspace_agent::Entity as WorkspaceAgent;
pub use workspace_build::Entity as WorkspaceBuild;
pub use workspace_resource::Entity as WorkspaceResource;

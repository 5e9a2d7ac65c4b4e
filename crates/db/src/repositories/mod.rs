//! Database repositories.

pub mod git_ssh_key;
pub mod user;
pub mod workspace;
pub mod workspace_agent;
pub mod workspace_build;
pub mod workspace_resource;

pub use git_ssh_key::GitSshKeyRepository;
pub use user::UserRepository;
pub use workspace::WorkspaceRepository;
pub use workspace_agent::WorkspaceAgentRepository;
pub use workspace_build::WorkspaceBuildRepository;
pub use workspace_resource::WorkspaceResourceRepository;

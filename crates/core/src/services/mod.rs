//! Business logic services.

pub mod authz;
pub mod git_ssh_key;
pub mod user;
pub mod workspace_agent;

pub use authz::{Actor, AuthAction, Authorizer, UserScopeAuthorizer};
pub use git_ssh_key::{AgentGitSshKeyResponse, GitSshKeyResponse, GitSshKeyService};
pub use user::UserService;
pub use workspace_agent::WorkspaceAgentService;

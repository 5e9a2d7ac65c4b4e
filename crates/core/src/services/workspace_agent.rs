//! Workspace agent service.

use workbridge_common::{AppError, AppResult};
use workbridge_db::entities::workspace_agent;
use workbridge_db::repositories::WorkspaceAgentRepository;

/// Service for workspace agent authentication.
///
/// Agents authenticate with their own session token, never with a user
/// token; the two principal kinds stay separate all the way through.
#[derive(Clone)]
pub struct WorkspaceAgentService {
    agent_repo: WorkspaceAgentRepository,
}

impl WorkspaceAgentService {
    /// Create a new workspace agent service.
    #[must_use]
    pub const fn new(agent_repo: WorkspaceAgentRepository) -> Self {
        Self { agent_repo }
    }

    /// Authenticate an agent by session token.
    pub async fn authenticate_by_token(&self, token: &str) -> AppResult<workspace_agent::Model> {
        self.agent_repo
            .find_by_token(token)
            .await?
            .ok_or(AppError::Unauthorized)
    }
}

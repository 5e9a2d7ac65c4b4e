//! Workspace agent repository.

use std::sync::Arc;

use crate::entities::{WorkspaceAgent, workspace_agent};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use workbridge_common::{AppError, AppResult};

/// Workspace agent repository for database operations.
#[derive(Clone)]
pub struct WorkspaceAgentRepository {
    db: Arc<DatabaseConnection>,
}

impl WorkspaceAgentRepository {
    /// Create a new workspace agent repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find an agent by session token.
    pub async fn find_by_token(&self, token: &str) -> AppResult<Option<workspace_agent::Model>> {
        WorkspaceAgent::find()
            .filter(workspace_agent::Column::Token.eq(token))
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Create a new workspace agent.
    pub async fn create(
        &self,
        model: workspace_agent::ActiveModel,
    ) -> AppResult<workspace_agent::Model> {
        model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn create_test_agent(id: &str, resource_id: &str, token: &str) -> workspace_agent::Model {
        workspace_agent::Model {
            id: id.to_string(),
            resource_id: resource_id.to_string(),
            name: "main".to_string(),
            token: token.to_string(),
            created_at: Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn test_find_by_token_found() {
        let agent = create_test_agent("agent1", "res1", "agent_token");

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[agent.clone()]])
                .into_connection(),
        );

        let repo = WorkspaceAgentRepository::new(db);
        let result = repo.find_by_token("agent_token").await.unwrap();

        assert!(result.is_some());
        assert_eq!(result.unwrap().resource_id, "res1");
    }

    #[tokio::test]
    async fn test_find_by_token_not_found() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<workspace_agent::Model>::new()])
                .into_connection(),
        );

        let repo = WorkspaceAgentRepository::new(db);
        let result = repo.find_by_token("missing").await.unwrap();

        assert!(result.is_none());
    }
}

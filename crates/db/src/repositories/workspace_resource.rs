//! Workspace resource repository.

use std::sync::Arc;

use crate::entities::{WorkspaceResource, workspace_resource};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait};
use workbridge_common::{AppError, AppResult};

/// Workspace resource repository for database operations.
#[derive(Clone)]
pub struct WorkspaceResourceRepository {
    db: Arc<DatabaseConnection>,
}

impl WorkspaceResourceRepository {
    /// Create a new workspace resource repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a resource by ID.
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<workspace_resource::Model>> {
        WorkspaceResource::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Create a new workspace resource.
    pub async fn create(
        &self,
        model: workspace_resource::ActiveModel,
    ) -> AppResult<workspace_resource::Model> {
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

    fn create_test_resource(id: &str, job_id: &str) -> workspace_resource::Model {
        workspace_resource::Model {
            id: id.to_string(),
            job_id: job_id.to_string(),
            name: "main".to_string(),
            created_at: Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn test_find_by_id_found() {
        let resource = create_test_resource("res1", "job1");

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[resource.clone()]])
                .into_connection(),
        );

        let repo = WorkspaceResourceRepository::new(db);
        let result = repo.find_by_id("res1").await.unwrap();

        assert!(result.is_some());
        assert_eq!(result.unwrap().job_id, "job1");
    }

    #[tokio::test]
    async fn test_find_by_id_not_found() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<workspace_resource::Model>::new()])
                .into_connection(),
        );

        let repo = WorkspaceResourceRepository::new(db);
        let result = repo.find_by_id("missing").await.unwrap();

        assert!(result.is_none());
    }
}

//! Workspace build repository.

use std::sync::Arc;

use crate::entities::{WorkspaceBuild, workspace_build};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use workbridge_common::{AppError, AppResult};

/// Workspace build repository for database operations.
#[derive(Clone)]
pub struct WorkspaceBuildRepository {
    db: Arc<DatabaseConnection>,
}

impl WorkspaceBuildRepository {
    /// Create a new workspace build repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a build by provisioner job ID.
    pub async fn find_by_job_id(&self, job_id: &str) -> AppResult<Option<workspace_build::Model>> {
        WorkspaceBuild::find()
            .filter(workspace_build::Column::JobId.eq(job_id))
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Create a new workspace build.
    pub async fn create(
        &self,
        model: workspace_build::ActiveModel,
    ) -> AppResult<workspace_build::Model> {
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

    fn create_test_build(id: &str, workspace_id: &str, job_id: &str) -> workspace_build::Model {
        workspace_build::Model {
            id: id.to_string(),
            workspace_id: workspace_id.to_string(),
            job_id: job_id.to_string(),
            created_at: Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn test_find_by_job_id_found() {
        let build = create_test_build("build1", "ws1", "job1");

        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([[build.clone()]])
                .into_connection(),
        );

        let repo = WorkspaceBuildRepository::new(db);
        let result = repo.find_by_job_id("job1").await.unwrap();

        assert!(result.is_some());
        assert_eq!(result.unwrap().workspace_id, "ws1");
    }

    #[tokio::test]
    async fn test_find_by_job_id_not_found() {
        let db = Arc::new(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<workspace_build::Model>::new()])
                .into_connection(),
        );

        let repo = WorkspaceBuildRepository::new(db);
        let result = repo.find_by_job_id("missing").await.unwrap();

        assert!(result.is_none());
    }
}

//! Workspace repository.

use std::sync::Arc;

use crate::entities::{Workspace, workspace};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait};
use workbridge_common::{AppError, AppResult};

/// Workspace repository for database operations.
#[derive(Clone)]
pub struct WorkspaceRepository {
    db: Arc<DatabaseConnection>,
}

impl WorkspaceRepository {
    /// Create a new workspace repository.
    #[must_use]
    pub const fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Find a workspace by ID.
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<workspace::Model>> {
        Workspace::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Create a new workspace.
    pub async fn create(&self, model: workspace::ActiveModel) -> AppResult<workspace::Model> {
        model
            .insert(self.db.as_ref())
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }
}

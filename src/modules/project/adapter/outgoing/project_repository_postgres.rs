use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use std::sync::Arc;

use super::project_row::{data_to_active_model, model_to_result};
use crate::modules::project::adapter::outgoing::sea_orm_entity::projects::{Column, Entity};
use crate::modules::project::application::ports::outgoing::project_repository::{
    ProjectData, ProjectRepository, ProjectRepositoryError, ProjectResult,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryPostgres {
    async fn create_project(
        &self,
        data: ProjectData,
    ) -> Result<ProjectResult, ProjectRepositoryError> {
        let model = data_to_active_model(data).map_err(map_json_err)?;

        let created = model.insert(&*self.db).await.map_err(map_db_err)?;

        model_to_result(created).map_err(map_json_err)
    }

    async fn replace_project(
        &self,
        project_id: i32,
        data: ProjectData,
    ) -> Result<ProjectResult, ProjectRepositoryError> {
        let model = data_to_active_model(data).map_err(map_json_err)?;

        let updated = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(project_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let row = updated
            .into_iter()
            .next()
            .ok_or(ProjectRepositoryError::NotFound)?;

        model_to_result(row).map_err(map_json_err)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn map_db_err(e: DbErr) -> ProjectRepositoryError {
    ProjectRepositoryError::DatabaseError(e.to_string())
}

fn map_json_err(e: serde_json::Error) -> ProjectRepositoryError {
    ProjectRepositoryError::SerializationError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================

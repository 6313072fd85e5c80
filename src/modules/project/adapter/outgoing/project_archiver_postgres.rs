// src/modules/project/adapter/outgoing/project_archiver_postgres.rs

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait};
use std::sync::Arc;
use tracing::debug;

use crate::modules::project::adapter::outgoing::sea_orm_entity::projects::Entity;
use crate::modules::project::application::ports::outgoing::project_archiver::{
    ProjectArchiver, ProjectArchiverError,
};

/// Deletes project rows outright.
#[derive(Clone)]
pub struct ProjectArchiverPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectArchiverPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectArchiver for ProjectArchiverPostgres {
    async fn hard_delete(&self, project_id: i32) -> Result<(), ProjectArchiverError> {
        let outcome = Entity::delete_by_id(project_id)
            .exec(&*self.db)
            .await
            .map_err(|e| ProjectArchiverError::DatabaseError(e.to_string()))?;

        match outcome.rows_affected {
            0 => Err(ProjectArchiverError::NotFound),
            _ => {
                debug!(project_id, "Project row deleted");
                Ok(())
            }
        }
    }
}

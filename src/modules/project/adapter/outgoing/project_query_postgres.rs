// src/modules/project/adapter/outgoing/project_query_postgres.rs

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;

use super::project_row::model_to_result;
use crate::modules::project::adapter::outgoing::sea_orm_entity::projects::{Column, Entity};
use crate::modules::project::application::ports::outgoing::project_query::{
    ProjectQuery, ProjectQueryError, ProjectVisibility,
};
use crate::modules::project::application::ports::outgoing::project_repository::ProjectResult;

// ============================================================================
// Query Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProjectQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectQuery for ProjectQueryPostgres {
    async fn list_projects(
        &self,
        visibility: ProjectVisibility,
    ) -> Result<Vec<ProjectResult>, ProjectQueryError> {
        let mut query = Entity::find();

        if visibility == ProjectVisibility::PublishedOnly {
            query = query.filter(Column::Published.eq(true));
        }

        let rows = query
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        rows.into_iter()
            .map(|row| model_to_result(row).map_err(map_json_err))
            .collect()
    }

    async fn get_project(
        &self,
        project_id: i32,
        visibility: ProjectVisibility,
    ) -> Result<ProjectResult, ProjectQueryError> {
        let mut query = Entity::find_by_id(project_id);

        if visibility == ProjectVisibility::PublishedOnly {
            query = query.filter(Column::Published.eq(true));
        }

        let row = query
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ProjectQueryError::NotFound)?;

        model_to_result(row).map_err(map_json_err)
    }
}

fn map_db_err(e: DbErr) -> ProjectQueryError {
    ProjectQueryError::DatabaseError(e.to_string())
}

fn map_json_err(e: serde_json::Error) -> ProjectQueryError {
    ProjectQueryError::SerializationError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================

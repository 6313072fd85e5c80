// src/modules/project/application/ports/outgoing/project_archiver.rs

use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectArchiverError {
    #[error("Project not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Permanent removal. There is no soft delete or restore.
#[async_trait]
pub trait ProjectArchiver: Send + Sync {
    async fn hard_delete(&self, project_id: i32) -> Result<(), ProjectArchiverError>;
}

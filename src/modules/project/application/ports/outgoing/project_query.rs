// src/modules/project/application/ports/outgoing/project_query.rs

use async_trait::async_trait;

use crate::modules::project::application::ports::outgoing::project_repository::ProjectResult;

//
// ──────────────────────────────────────────────────────────
// Query DTOs
// ──────────────────────────────────────────────────────────
//

/// Which rows a read may see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectVisibility {
    /// Dashboard reads: drafts included
    #[default]
    All,
    /// Public pages: `published = true` only
    PublishedOnly,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectQueryError {
    #[error("Project not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (Read-side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProjectQuery: Send + Sync {
    /// Newest `created_at` first.
    async fn list_projects(
        &self,
        visibility: ProjectVisibility,
    ) -> Result<Vec<ProjectResult>, ProjectQueryError>;

    /// `NotFound` also covers an unpublished row read with `PublishedOnly`.
    async fn get_project(
        &self,
        project_id: i32,
        visibility: ProjectVisibility,
    ) -> Result<ProjectResult, ProjectQueryError>;
}

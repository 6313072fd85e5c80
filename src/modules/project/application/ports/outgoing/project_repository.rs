// src/modules/project/application/ports/outgoing/project_repository.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::project::application::domain::entities::{Testimonial, DEFAULT_STATUS};

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

/// Writable part of a project. Create and replace both write every field.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectData {
    pub title: String,
    pub category: String,
    pub description: String,
    pub full_description: String,
    pub technologies: Vec<String>,
    pub images: Vec<String>,
    pub github: Option<String>,
    pub demo: Option<String>,
    pub rating: f64,
    pub icon: String,
    pub duration: String,
    pub team: String,
    pub status: String,
    pub challenges: Vec<String>,
    pub solutions: Vec<String>,
    pub features: Vec<String>,
    pub objectives: Vec<String>,
    pub results: Vec<String>,
    pub testimonial: Option<Testimonial>,
    pub published: bool,
}

impl Default for ProjectData {
    fn default() -> Self {
        Self {
            title: String::new(),
            category: String::new(),
            description: String::new(),
            full_description: String::new(),
            technologies: Vec::new(),
            images: Vec::new(),
            github: None,
            demo: None,
            rating: 0.0,
            icon: String::new(),
            duration: String::new(),
            team: String::new(),
            status: DEFAULT_STATUS.to_string(),
            challenges: Vec::new(),
            solutions: Vec::new(),
            features: Vec::new(),
            objectives: Vec::new(),
            results: Vec::new(),
            testimonial: None,
            published: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResult {
    #[schema(example = 42)]
    pub id: i32,
    #[schema(example = "Inventory Platform")]
    pub title: String,
    #[schema(example = "Web")]
    pub category: String,
    pub description: String,
    pub full_description: String,
    pub technologies: Vec<String>,
    pub images: Vec<String>,
    pub github: Option<String>,
    pub demo: Option<String>,
    #[schema(example = 4.5)]
    pub rating: f64,
    pub icon: String,
    pub duration: String,
    pub team: String,
    #[schema(example = "Completed")]
    pub status: String,
    pub challenges: Vec<String>,
    pub solutions: Vec<String>,
    pub features: Vec<String>,
    pub objectives: Vec<String>,
    pub results: Vec<String>,
    pub testimonial: Option<Testimonial>,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectRepositoryError {
    #[error("Project not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (Command-side, projects table only)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn create_project(
        &self,
        data: ProjectData,
    ) -> Result<ProjectResult, ProjectRepositoryError>;

    /// Full-record replace. `NotFound` when no row has this id.
    async fn replace_project(
        &self,
        project_id: i32,
        data: ProjectData,
    ) -> Result<ProjectResult, ProjectRepositoryError>;
}

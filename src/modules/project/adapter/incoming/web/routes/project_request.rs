use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::project::application::domain::entities::Testimonial;
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectCommand, CreateProjectCommandError,
};
use crate::modules::project::application::ports::outgoing::project_repository::ProjectData;

/// Body of `POST /api/projects` and `PUT /api/projects/{id}`.
///
/// Only `title` and `description` are required. Everything omitted or null
/// takes its default, so a PUT resets fields it does not send.
#[derive(Debug, Default, Clone, Deserialize, Serialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectRequest {
    #[schema(example = "Inventory Platform")]
    pub title: Option<String>,
    #[schema(example = "Web")]
    pub category: Option<String>,
    #[schema(example = "Tracks stock across warehouses")]
    pub description: Option<String>,
    pub full_description: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub images: Option<Vec<String>>,
    pub github: Option<String>,
    pub demo: Option<String>,
    #[schema(example = 4.5)]
    pub rating: Option<f64>,
    pub icon: Option<String>,
    pub duration: Option<String>,
    pub team: Option<String>,
    #[schema(example = "In Progress")]
    pub status: Option<String>,
    pub challenges: Option<Vec<String>>,
    pub solutions: Option<Vec<String>>,
    pub features: Option<Vec<String>>,
    pub objectives: Option<Vec<String>>,
    pub results: Option<Vec<String>>,
    pub testimonial: Option<Testimonial>,
    pub published: Option<bool>,
}

impl ProjectRequest {
    pub fn into_command(self) -> Result<CreateProjectCommand, CreateProjectCommandError> {
        let defaults = ProjectData::default();

        CreateProjectCommand::new(ProjectData {
            title: self.title.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            full_description: self.full_description.unwrap_or_default(),
            technologies: self.technologies.unwrap_or_default(),
            images: self.images.unwrap_or_default(),
            github: self.github,
            demo: self.demo,
            rating: self.rating.unwrap_or(defaults.rating),
            icon: self.icon.unwrap_or_default(),
            duration: self.duration.unwrap_or_default(),
            team: self.team.unwrap_or_default(),
            status: self.status.unwrap_or(defaults.status),
            challenges: self.challenges.unwrap_or_default(),
            solutions: self.solutions.unwrap_or_default(),
            features: self.features.unwrap_or_default(),
            objectives: self.objectives.unwrap_or_default(),
            results: self.results.unwrap_or_default(),
            testimonial: self.testimonial,
            published: self.published.unwrap_or(defaults.published),
        })
    }
}

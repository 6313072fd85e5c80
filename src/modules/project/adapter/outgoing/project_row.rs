// Row <-> DTO conversion shared by the command and query adapters.

use chrono::Utc;
use sea_orm::Set;

use crate::modules::project::adapter::outgoing::sea_orm_entity::projects::{ActiveModel, Model};
use crate::modules::project::application::domain::entities::Testimonial;
use crate::modules::project::application::ports::outgoing::project_repository::{
    ProjectData, ProjectResult,
};

pub(super) fn model_to_result(model: Model) -> Result<ProjectResult, serde_json::Error> {
    let testimonial = match model.testimonial {
        Some(json) if !json.is_null() => Some(serde_json::from_value::<Testimonial>(json)?),
        _ => None,
    };

    Ok(ProjectResult {
        id: model.id,
        title: model.title,
        category: model.category,
        description: model.description,
        full_description: model.full_description,
        technologies: string_array(model.technologies)?,
        images: string_array(model.images)?,
        github: model.github,
        demo: model.demo,
        rating: model.rating,
        icon: model.icon,
        duration: model.duration,
        team: model.team,
        status: model.status,
        challenges: string_array(model.challenges)?,
        solutions: string_array(model.solutions)?,
        features: string_array(model.features)?,
        objectives: string_array(model.objectives)?,
        results: string_array(model.results)?,
        testimonial,
        published: model.published,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

/// Every writable column set. `id` and `created_at` stay untouched.
pub(super) fn data_to_active_model(data: ProjectData) -> Result<ActiveModel, serde_json::Error> {
    let testimonial = data
        .testimonial
        .map(serde_json::to_value)
        .transpose()?;

    Ok(ActiveModel {
        title: Set(data.title),
        category: Set(data.category),
        description: Set(data.description),
        full_description: Set(data.full_description),
        technologies: Set(serde_json::to_value(data.technologies)?),
        images: Set(serde_json::to_value(data.images)?),
        github: Set(data.github),
        demo: Set(data.demo),
        rating: Set(data.rating),
        icon: Set(data.icon),
        duration: Set(data.duration),
        team: Set(data.team),
        status: Set(data.status),
        challenges: Set(serde_json::to_value(data.challenges)?),
        solutions: Set(serde_json::to_value(data.solutions)?),
        features: Set(serde_json::to_value(data.features)?),
        objectives: Set(serde_json::to_value(data.objectives)?),
        results: Set(serde_json::to_value(data.results)?),
        testimonial: Set(testimonial),
        published: Set(data.published),
        updated_at: Set(Utc::now().fixed_offset()),
        ..Default::default()
    })
}

// A NULL slipped in by hand still reads as an empty list
fn string_array(json: serde_json::Value) -> Result<Vec<String>, serde_json::Error> {
    if json.is_null() {
        return Ok(Vec::new());
    }
    serde_json::from_value(json)
}

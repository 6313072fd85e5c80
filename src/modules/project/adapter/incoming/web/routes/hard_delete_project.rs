use actix_web::{delete, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::modules::project::application::ports::incoming::use_cases::HardDeleteProjectError;
use crate::shared::api::{parse_record_id, ApiResponse};
use crate::AppState;

/// Permanently delete a project
#[utoipa::path(
    delete,
    path = "/api/projects/{id}",
    tag = "projects",
    params(("id" = i32, Path, description = "Project id")),
    responses(
        (status = 204, description = "Project deleted"),
        (status = 400, description = "Id is not a positive integer", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/projects/{id}")]
pub async fn hard_delete_project_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = match parse_record_id(&path) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match data.project.hard_delete.execute(project_id).await {
        Ok(()) => ApiResponse::no_content(),

        Err(HardDeleteProjectError::ProjectNotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(HardDeleteProjectError::RepositoryError(e)) => {
            error!("Failed to delete project {}: {}", project_id, e);
            ApiResponse::internal_error()
        }
    }
}

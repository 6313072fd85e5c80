use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::project::application::ports::incoming::use_cases::GetSingleProjectError;
use crate::modules::project::application::ports::outgoing::project_repository::ProjectResult;
use crate::shared::api::{parse_record_id, ApiResponse};
use crate::AppState;

/// Get one project by id
#[utoipa::path(
    get,
    path = "/api/projects/{id}",
    tag = "projects",
    params(("id" = i32, Path, description = "Project id")),
    responses(
        (status = 200, description = "Project", body = inline(SuccessResponse<ProjectResult>)),
        (status = 400, description = "Id is not a positive integer", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/projects/{id}")]
pub async fn get_project_by_id_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = match parse_record_id(&path) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match data.project.get_single.execute(project_id).await {
        Ok(project) => ApiResponse::success(project),
        Err(GetSingleProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }
        Err(GetSingleProjectError::QueryError(e)) => {
            error!("Failed to load project {}: {}", project_id, e);
            ApiResponse::internal_error()
        }
    }
}

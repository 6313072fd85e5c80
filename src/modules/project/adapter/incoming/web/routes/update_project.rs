use actix_web::{put, web, Responder};
use tracing::error;

use super::project_request::ProjectRequest;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::project::application::ports::incoming::use_cases::UpdateProjectError;
use crate::modules::project::application::ports::outgoing::project_repository::ProjectResult;
use crate::shared::api::{parse_json_body, parse_record_id, ApiResponse};
use crate::AppState;

/// Replace a project
///
/// Full-record replace with the same validation as create. Omitted fields reset.
#[utoipa::path(
    put,
    path = "/api/projects/{id}",
    tag = "projects",
    params(("id" = i32, Path, description = "Project id")),
    request_body = ProjectRequest,
    responses(
        (status = 200, description = "Project replaced", body = inline(SuccessResponse<ProjectResult>)),
        (status = 400, description = "Invalid id or body", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/projects/{id}")]
pub async fn update_project_handler(
    path: web::Path<String>,
    body: web::Bytes,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = match parse_record_id(&path) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    // The id is checked before the body, so a bad id wins over a bad body.
    let req: ProjectRequest = match parse_json_body(&body) {
        Ok(req) => req,
        Err(resp) => return resp,
    };

    let command = match req.into_command() {
        Ok(command) => command,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data.project.update.execute(project_id, command).await {
        Ok(project) => ApiResponse::success(project),
        Err(UpdateProjectError::ProjectNotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }
        Err(UpdateProjectError::RepositoryError(e)) => {
            error!("Failed to replace project {}: {}", project_id, e);
            ApiResponse::internal_error()
        }
    }
}

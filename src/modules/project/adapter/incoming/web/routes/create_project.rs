use actix_web::{post, web, Responder};
use tracing::error;

use super::project_request::ProjectRequest;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::project::application::ports::incoming::use_cases::CreateProjectError;
use crate::modules::project::application::ports::outgoing::project_repository::ProjectResult;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Create a project
///
/// `title` and `description` are required. Omitted arrays are stored empty.
#[utoipa::path(
    post,
    path = "/api/projects",
    tag = "projects",
    request_body = ProjectRequest,
    responses(
        (status = 201, description = "Project created", body = inline(SuccessResponse<ProjectResult>)),
        (
            status = 400,
            description = "Missing title or description",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "VALIDATION_ERROR",
                    "message": "Title is required"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/projects")]
pub async fn create_project_handler(
    req: web::Json<ProjectRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match req.into_inner().into_command() {
        Ok(command) => command,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data.project.create.execute(command).await {
        Ok(created) => ApiResponse::created(created),

        Err(CreateProjectError::RepositoryError(e)) => {
            error!("Repository error creating project: {}", e);
            ApiResponse::internal_error()
        }
    }
}

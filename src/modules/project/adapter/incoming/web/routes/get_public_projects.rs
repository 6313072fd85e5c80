use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::project::application::ports::incoming::use_cases::GetProjectsError;
use crate::modules::project::application::ports::outgoing::project_repository::ProjectResult;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List published projects, newest first
#[utoipa::path(
    get,
    path = "/api/public/projects",
    tag = "public",
    responses(
        (status = 200, description = "Published projects", body = inline(SuccessResponse<Vec<ProjectResult>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/public/projects")]
pub async fn get_public_projects_handler(data: web::Data<AppState>) -> impl Responder {
    match data.project.get_public_list.execute().await {
        Ok(projects) => ApiResponse::success(projects),
        Err(GetProjectsError::QueryError(e)) => {
            error!("Failed to list public projects: {}", e);
            ApiResponse::internal_error()
        }
    }
}

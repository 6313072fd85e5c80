use actix_web::{delete, web, Responder};
use tracing::error;

use crate::api::schemas::ErrorResponse;
use crate::modules::social::application::ports::incoming::use_cases::DeleteSocialError;
use crate::shared::api::{parse_record_id, ApiResponse};
use crate::AppState;

/// Delete a social media link
#[utoipa::path(
    delete,
    path = "/api/socials/{id}",
    tag = "socials",
    params(("id" = i32, Path, description = "Link id")),
    responses(
        (status = 204, description = "Link deleted"),
        (status = 400, description = "Id is not a positive integer", body = ErrorResponse),
        (status = 404, description = "Link not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/socials/{id}")]
pub async fn delete_social_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = match parse_record_id(&path) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match data.social.delete.execute(id).await {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteSocialError::NotFound) => {
            ApiResponse::not_found("SOCIAL_NOT_FOUND", "Social media link not found")
        }
        Err(DeleteSocialError::RepositoryError(e)) => {
            error!("Failed to delete social link {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}

use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::social::application::ports::incoming::use_cases::GetSocialError;
use crate::modules::social::application::ports::outgoing::SocialMediaResult;
use crate::shared::api::{parse_record_id, ApiResponse};
use crate::AppState;

/// Get one social media link
#[utoipa::path(
    get,
    path = "/api/socials/{id}",
    tag = "socials",
    params(("id" = i32, Path, description = "Link id")),
    responses(
        (status = 200, description = "Link", body = inline(SuccessResponse<SocialMediaResult>)),
        (status = 400, description = "Id is not a positive integer", body = ErrorResponse),
        (status = 404, description = "Link not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/socials/{id}")]
pub async fn get_social_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = match parse_record_id(&path) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match data.social.get_single.execute(id).await {
        Ok(social) => ApiResponse::success(social),
        Err(GetSocialError::NotFound) => {
            ApiResponse::not_found("SOCIAL_NOT_FOUND", "Social media link not found")
        }
        Err(GetSocialError::RepositoryError(e)) => {
            error!("Failed to load social link {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}

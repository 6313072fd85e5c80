use actix_web::{put, web, Responder};
use tracing::error;

use super::create_social::SocialMediaRequest;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::social::application::ports::incoming::use_cases::UpdateSocialError;
use crate::modules::social::application::ports::outgoing::SocialMediaResult;
use crate::shared::api::{parse_json_body, parse_record_id, ApiResponse};
use crate::AppState;

/// Replace a social media link
#[utoipa::path(
    put,
    path = "/api/socials/{id}",
    tag = "socials",
    params(("id" = i32, Path, description = "Link id")),
    request_body = SocialMediaRequest,
    responses(
        (status = 200, description = "Link updated", body = inline(SuccessResponse<SocialMediaResult>)),
        (status = 400, description = "Invalid id or body", body = ErrorResponse),
        (status = 404, description = "Link not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/socials/{id}")]
pub async fn update_social_handler(
    path: web::Path<String>,
    body: web::Bytes,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = match parse_record_id(&path) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    // The id is checked before the body, so a bad id wins over a bad body.
    let req: SocialMediaRequest = match parse_json_body(&body) {
        Ok(req) => req,
        Err(resp) => return resp,
    };

    let command = match req.into_command() {
        Ok(command) => command,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data.social.update.execute(id, command).await {
        Ok(social) => ApiResponse::success(social),
        Err(UpdateSocialError::NotFound) => {
            ApiResponse::not_found("SOCIAL_NOT_FOUND", "Social media link not found")
        }
        Err(UpdateSocialError::RepositoryError(e)) => {
            error!("Failed to update social link {}: {}", id, e);
            ApiResponse::internal_error()
        }
    }
}

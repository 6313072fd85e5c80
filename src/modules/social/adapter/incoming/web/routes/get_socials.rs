use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::social::application::ports::incoming::use_cases::GetSocialsError;
use crate::modules::social::application::ports::outgoing::SocialMediaResult;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List social media links, newest first
#[utoipa::path(
    get,
    path = "/api/socials",
    tag = "socials",
    responses(
        (status = 200, description = "Links", body = inline(SuccessResponse<Vec<SocialMediaResult>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/socials")]
pub async fn get_socials_handler(data: web::Data<AppState>) -> impl Responder {
    match data.social.get_list.execute().await {
        Ok(socials) => ApiResponse::success(socials),
        Err(GetSocialsError::RepositoryError(e)) => {
            error!("Failed to list social links: {}", e);
            ApiResponse::internal_error()
        }
    }
}

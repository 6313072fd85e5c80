use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::social::application::domain::social_media::{
    SocialMediaCommand, SocialMediaCommandError,
};
use crate::modules::social::application::ports::incoming::use_cases::CreateSocialError;
use crate::modules::social::application::ports::outgoing::SocialMediaResult;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// Body of `POST /api/socials` and `PUT /api/socials/{id}`.
#[derive(Debug, Default, Clone, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct SocialMediaRequest {
    #[schema(example = "GitHub")]
    pub name: Option<String>,
    #[schema(example = "https://github.com/ada")]
    pub url: Option<String>,
    #[schema(example = "github")]
    pub icon: Option<String>,
}

impl SocialMediaRequest {
    pub fn into_command(self) -> Result<SocialMediaCommand, SocialMediaCommandError> {
        SocialMediaCommand::new(self.name, self.url, self.icon)
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Add a social media link
#[utoipa::path(
    post,
    path = "/api/socials",
    tag = "socials",
    request_body = SocialMediaRequest,
    responses(
        (
            status = 201,
            description = "Link created",
            body = inline(SuccessResponse<SocialMediaResult>),
            example = json!({
                "success": true,
                "data": {"id": 1, "name": "GitHub", "url": "https://github.com/ada", "icon": ""}
            })
        ),
        (status = 400, description = "Missing name or url", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/socials")]
pub async fn create_social_handler(
    req: web::Json<SocialMediaRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match req.into_inner().into_command() {
        Ok(command) => command,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data.social.create.execute(command).await {
        Ok(created) => ApiResponse::created(created),
        Err(CreateSocialError::RepositoryError(e)) => {
            error!("Failed to create social link: {}", e);
            ApiResponse::internal_error()
        }
    }
}

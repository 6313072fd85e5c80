use actix_web::{put, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::profile::application::domain::entities::{
    Certificate, EducationEntry, DEFAULT_AVAILABILITY,
};
use crate::modules::profile::application::ports::incoming::use_cases::UpsertProfileError;
use crate::modules::profile::application::ports::outgoing::{ProfileData, ProfileResult};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// Full profile document. Omitted or null fields are reset to their defaults.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct UpsertProfileRequest {
    pub name: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub resume: Option<String>,
    pub experience: Option<String>,
    #[schema(example = "available")]
    pub availability: Option<String>,
    pub skills: Option<Vec<String>>,
    pub languages: Option<Vec<String>>,
    pub education: Option<Vec<EducationEntry>>,
    pub certificates: Option<Vec<Certificate>>,
}

impl UpsertProfileRequest {
    pub fn into_data(self) -> ProfileData {
        ProfileData {
            name: self.name.unwrap_or_default(),
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            bio: self.bio.unwrap_or_default(),
            avatar: self.avatar.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            phone: self.phone.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            website: self.website.unwrap_or_default(),
            linkedin: self.linkedin.unwrap_or_default(),
            github: self.github.unwrap_or_default(),
            resume: self.resume.unwrap_or_default(),
            experience: self.experience.unwrap_or_default(),
            // A blank availability is treated like an omitted one
            availability: self
                .availability
                .filter(|a| !a.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_AVAILABILITY.to_string()),
            skills: self.skills.unwrap_or_default(),
            languages: self.languages.unwrap_or_default(),
            education: self.education.unwrap_or_default(),
            certificates: self.certificates.unwrap_or_default(),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Replace the portfolio profile
///
/// Full-record upsert: every field not sent is reset. Sending the same body twice
/// leaves the same stored state.
#[utoipa::path(
    put,
    path = "/api/profile",
    tag = "profile",
    request_body = UpsertProfileRequest,
    responses(
        (status = 200, description = "Profile stored", body = inline(SuccessResponse<ProfileResult>)),
        (status = 400, description = "Malformed JSON body", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/profile")]
pub async fn upsert_profile_handler(
    req: web::Json<UpsertProfileRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let profile = req.into_inner().into_data();

    match data.profile.upsert.execute(profile).await {
        Ok(stored) => ApiResponse::success(stored),
        Err(UpsertProfileError::RepositoryError(e)) => {
            error!("Failed to upsert profile: {}", e);
            ApiResponse::internal_error()
        }
    }
}

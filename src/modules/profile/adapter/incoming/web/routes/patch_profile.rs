use actix_web::{patch, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::profile::application::domain::entities::{Certificate, EducationEntry};
use crate::modules::profile::application::ports::incoming::use_cases::PatchProfileError;
use crate::modules::profile::application::ports::outgoing::{PatchProfileData, ProfileResult};
use crate::shared::api::ApiResponse;
use crate::shared::patch::PatchField;

use crate::AppState;

/// Omitted = keep, null = reset to default, value = replace.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct PatchProfileRequest {
    #[schema(value_type = Option<String>)]
    pub name: PatchField<String>,
    #[schema(value_type = Option<String>)]
    pub title: PatchField<String>,
    #[schema(value_type = Option<String>)]
    pub description: PatchField<String>,
    #[schema(value_type = Option<String>)]
    pub bio: PatchField<String>,
    #[schema(value_type = Option<String>)]
    pub avatar: PatchField<String>,
    #[schema(value_type = Option<String>)]
    pub email: PatchField<String>,
    #[schema(value_type = Option<String>)]
    pub phone: PatchField<String>,
    #[schema(value_type = Option<String>)]
    pub location: PatchField<String>,
    #[schema(value_type = Option<String>)]
    pub website: PatchField<String>,
    #[schema(value_type = Option<String>)]
    pub linkedin: PatchField<String>,
    #[schema(value_type = Option<String>)]
    pub github: PatchField<String>,
    #[schema(value_type = Option<String>)]
    pub resume: PatchField<String>,
    #[schema(value_type = Option<String>)]
    pub experience: PatchField<String>,
    #[schema(value_type = Option<String>)]
    pub availability: PatchField<String>,
    #[schema(value_type = Option<Vec<String>>)]
    pub skills: PatchField<Vec<String>>,
    #[schema(value_type = Option<Vec<String>>)]
    pub languages: PatchField<Vec<String>>,
    #[schema(value_type = Option<Vec<EducationEntry>>)]
    pub education: PatchField<Vec<EducationEntry>>,
    #[schema(value_type = Option<Vec<Certificate>>)]
    pub certificates: PatchField<Vec<Certificate>>,
}

impl From<PatchProfileRequest> for PatchProfileData {
    fn from(req: PatchProfileRequest) -> Self {
        PatchProfileData {
            name: req.name,
            title: req.title,
            description: req.description,
            bio: req.bio,
            avatar: req.avatar,
            email: req.email,
            phone: req.phone,
            location: req.location,
            website: req.website,
            linkedin: req.linkedin,
            github: req.github,
            resume: req.resume,
            experience: req.experience,
            availability: req.availability,
            skills: req.skills,
            languages: req.languages,
            education: req.education,
            certificates: req.certificates,
        }
    }
}

/// Partially update the portfolio profile
#[utoipa::path(
    patch,
    path = "/api/profile",
    tag = "profile",
    request_body = PatchProfileRequest,
    responses(
        (status = 200, description = "Profile updated", body = inline(SuccessResponse<ProfileResult>)),
        (status = 400, description = "Malformed JSON body", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[patch("/api/profile")]
pub async fn patch_profile_handler(
    req: web::Json<PatchProfileRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let patch = PatchProfileData::from(req.into_inner());

    match data.profile.patch.execute(patch).await {
        Ok(profile) => ApiResponse::success(profile),
        Err(PatchProfileError::RepositoryError(e)) => {
            error!("Failed to patch profile: {}", e);
            ApiResponse::internal_error()
        }
    }
}

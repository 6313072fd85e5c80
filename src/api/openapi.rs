use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

// Auth
use crate::auth::adapter::incoming::web::routes::LoginRequestDto;
use crate::auth::application::domain::AdminSession;
use crate::auth::application::ports::incoming::use_cases::LoginResult;
// Profile
use crate::profile::adapter::incoming::web::routes::{PatchProfileRequest, UpsertProfileRequest};
use crate::profile::application::domain::entities::{Certificate, EducationEntry};
use crate::profile::application::ports::outgoing::ProfileResult;
// Projects
use crate::project::adapter::incoming::web::routes::ProjectRequest;
use crate::project::application::domain::entities::Testimonial;
use crate::project::application::ports::outgoing::ProjectResult;
// Socials
use crate::social::adapter::incoming::web::routes::SocialMediaRequest;
use crate::social::application::ports::outgoing::SocialMediaResult;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "Profile, projects and social links behind a personal portfolio site"
    ),
    paths(
        // Health
        crate::health::health,
        crate::health::readiness,

        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::login_handler,
        crate::auth::adapter::incoming::web::routes::get_session_handler,
        crate::auth::adapter::incoming::web::routes::logout_handler,

        // Profile endpoints
        crate::profile::adapter::incoming::web::routes::get_profile_handler,
        crate::profile::adapter::incoming::web::routes::upsert_profile_handler,
        crate::profile::adapter::incoming::web::routes::patch_profile_handler,

        // Project endpoints
        crate::project::adapter::incoming::web::routes::get_projects_handler,
        crate::project::adapter::incoming::web::routes::create_project_handler,
        crate::project::adapter::incoming::web::routes::get_project_by_id_handler,
        crate::project::adapter::incoming::web::routes::update_project_handler,
        crate::project::adapter::incoming::web::routes::hard_delete_project_handler,
        crate::project::adapter::incoming::web::routes::get_public_projects_handler,
        crate::project::adapter::incoming::web::routes::get_public_single_project_handler,

        // Social endpoints
        crate::social::adapter::incoming::web::routes::get_socials_handler,
        crate::social::adapter::incoming::web::routes::create_social_handler,
        crate::social::adapter::incoming::web::routes::get_social_handler,
        crate::social::adapter::incoming::web::routes::update_social_handler,
        crate::social::adapter::incoming::web::routes::delete_social_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,

            // Auth DTOs
            LoginRequestDto,
            LoginResult,
            AdminSession,

            // Profile DTOs
            UpsertProfileRequest,
            PatchProfileRequest,
            ProfileResult,
            EducationEntry,
            Certificate,

            // Project DTOs
            ProjectRequest,
            ProjectResult,
            Testimonial,

            // Social DTOs
            SocialMediaRequest,
            SocialMediaResult,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Admin session endpoints"),
        (name = "profile", description = "Portfolio owner profile"),
        (name = "projects", description = "Project management endpoints"),
        (name = "public", description = "Published projects for visitors"),
        (name = "socials", description = "Social media links"),
        (name = "health", description = "Liveness and readiness probes"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Session token from POST /api/auth/login"))
                        .build(),
                ),
            )
        }
    }
}

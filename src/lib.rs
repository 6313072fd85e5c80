pub mod api;
pub mod client;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::{auth, profile, project, social};

use actix_web::web;

use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::profile::application::profile_use_cases::ProfileUseCases;
use crate::project::application::project_use_cases::ProjectUseCases;
use crate::social::application::social_use_cases::SocialUseCases;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub profile: ProfileUseCases,
    pub project: ProjectUseCases,
    pub social: SocialUseCases,
    pub auth: AuthUseCases,
}

#[cfg(not(tarpaulin_include))]
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Profile
    cfg.service(crate::profile::adapter::incoming::web::routes::get_profile_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::upsert_profile_handler);
    cfg.service(crate::profile::adapter::incoming::web::routes::patch_profile_handler);
    // Projects
    cfg.service(crate::project::adapter::incoming::web::routes::get_projects_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::create_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::get_project_by_id_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::update_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::hard_delete_project_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::get_public_projects_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::get_public_single_project_handler);
    // Socials
    cfg.service(crate::social::adapter::incoming::web::routes::get_socials_handler);
    cfg.service(crate::social::adapter::incoming::web::routes::create_social_handler);
    cfg.service(crate::social::adapter::incoming::web::routes::get_social_handler);
    cfg.service(crate::social::adapter::incoming::web::routes::update_social_handler);
    cfg.service(crate::social::adapter::incoming::web::routes::delete_social_handler);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::login_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::get_session_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::logout_handler);
}

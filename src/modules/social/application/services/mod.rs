mod create_social_service;
mod delete_social_service;
mod get_social_service;
mod get_socials_service;
mod update_social_service;

pub use create_social_service::CreateSocialService;
pub use delete_social_service::DeleteSocialService;
pub use get_social_service::GetSocialService;
pub use get_socials_service::GetSocialsService;
pub use update_social_service::UpdateSocialService;

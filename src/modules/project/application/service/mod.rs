mod create_project_service;
mod get_projects_service;
mod get_public_projects_service;
mod get_public_single_project_service;
mod get_single_project_service;
mod hard_delete_project_service;
mod update_project_service;

pub use create_project_service::CreateProjectService;
pub use get_projects_service::GetProjectsService;
pub use get_public_projects_service::GetPublicProjectsService;
pub use get_public_single_project_service::GetPublicSingleProjectService;
pub use get_single_project_service::GetSingleProjectService;
pub use hard_delete_project_service::HardDeleteProjectService;
pub use update_project_service::UpdateProjectService;

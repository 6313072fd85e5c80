mod create_project;
mod get_projects;
mod get_public_single_project;
mod get_single_project;
mod hard_delete_project;
mod update_project;

pub use create_project::{
    CreateProjectCommand, CreateProjectCommandError, CreateProjectError, CreateProjectUseCase,
};
pub use get_projects::{GetProjectsError, GetProjectsUseCase, GetPublicProjectsUseCase};
pub use get_public_single_project::{GetPublicSingleProjectError, GetPublicSingleProjectUseCase};
pub use get_single_project::{GetSingleProjectError, GetSingleProjectUseCase};
pub use hard_delete_project::{HardDeleteProjectError, HardDeleteProjectUseCase};
pub use update_project::{UpdateProjectError, UpdateProjectUseCase};

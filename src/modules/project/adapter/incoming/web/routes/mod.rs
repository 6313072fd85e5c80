mod create_project;
mod get_projects;
mod get_public_projects;
mod get_public_single_project;
mod get_single_project;
mod hard_delete_project;
mod project_request;
mod update_project;

pub use create_project::*;
pub use get_projects::*;
pub use get_public_projects::*;
pub use get_public_single_project::*;
pub use get_single_project::*;
pub use hard_delete_project::*;
pub use project_request::ProjectRequest;
pub use update_project::*;

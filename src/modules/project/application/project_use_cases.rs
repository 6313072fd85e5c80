use std::sync::Arc;

use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectUseCase, GetProjectsUseCase, GetPublicProjectsUseCase,
    GetPublicSingleProjectUseCase, GetSingleProjectUseCase, HardDeleteProjectUseCase,
    UpdateProjectUseCase,
};

#[derive(Clone)]
pub struct ProjectUseCases {
    pub create: Arc<dyn CreateProjectUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetProjectsUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSingleProjectUseCase + Send + Sync>,
    pub get_public_list: Arc<dyn GetPublicProjectsUseCase + Send + Sync>,
    pub get_public_single: Arc<dyn GetPublicSingleProjectUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateProjectUseCase + Send + Sync>,
    pub hard_delete: Arc<dyn HardDeleteProjectUseCase + Send + Sync>,
}

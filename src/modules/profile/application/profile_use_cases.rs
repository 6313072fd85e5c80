use std::sync::Arc;

use crate::modules::profile::application::ports::incoming::use_cases::{
    GetProfileUseCase, PatchProfileUseCase, UpsertProfileUseCase,
};

#[derive(Clone)]
pub struct ProfileUseCases {
    pub get: Arc<dyn GetProfileUseCase + Send + Sync>,
    pub upsert: Arc<dyn UpsertProfileUseCase + Send + Sync>,
    pub patch: Arc<dyn PatchProfileUseCase + Send + Sync>,
}

use std::sync::Arc;

use crate::modules::social::application::ports::incoming::use_cases::{
    CreateSocialUseCase, DeleteSocialUseCase, GetSocialUseCase, GetSocialsUseCase,
    UpdateSocialUseCase,
};

#[derive(Clone)]
pub struct SocialUseCases {
    pub create: Arc<dyn CreateSocialUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetSocialsUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSocialUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateSocialUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteSocialUseCase + Send + Sync>,
}

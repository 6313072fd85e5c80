use std::sync::Arc;

use crate::modules::auth::application::ports::incoming::use_cases::LoginUseCase;

#[derive(Clone)]
pub struct AuthUseCases {
    pub login: Arc<dyn LoginUseCase + Send + Sync>,
}

use std::sync::Arc;

use actix_web::web;

use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::ports::incoming::use_cases::LoginUseCase;
use crate::profile::application::ports::incoming::use_cases::{
    GetProfileUseCase, PatchProfileUseCase, UpsertProfileUseCase,
};
use crate::profile::application::profile_use_cases::ProfileUseCases;
use crate::project::application::ports::incoming::use_cases::{
    CreateProjectUseCase, GetProjectsUseCase, GetPublicProjectsUseCase,
    GetPublicSingleProjectUseCase, GetSingleProjectUseCase, HardDeleteProjectUseCase,
    UpdateProjectUseCase,
};
use crate::project::application::project_use_cases::ProjectUseCases;
use crate::social::application::ports::incoming::use_cases::{
    CreateSocialUseCase, DeleteSocialUseCase, GetSocialUseCase, GetSocialsUseCase,
    UpdateSocialUseCase,
};
use crate::social::application::social_use_cases::SocialUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Builds an [`AppState`] where every use case is a stub unless replaced.
pub struct TestAppStateBuilder {
    profile: ProfileUseCases,
    project: ProjectUseCases,
    social: SocialUseCases,
    auth: AuthUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            profile: ProfileUseCases {
                get: Arc::new(StubGetProfileUseCase),
                upsert: Arc::new(StubUpsertProfileUseCase),
                patch: Arc::new(StubPatchProfileUseCase),
            },
            project: ProjectUseCases {
                create: Arc::new(StubCreateProjectUseCase),
                get_list: Arc::new(StubGetProjectsUseCase),
                get_single: Arc::new(StubGetSingleProjectUseCase),
                get_public_list: Arc::new(StubGetProjectsUseCase),
                get_public_single: Arc::new(StubGetSingleProjectUseCase),
                update: Arc::new(StubUpdateProjectUseCase),
                hard_delete: Arc::new(StubHardDeleteProjectUseCase),
            },
            social: SocialUseCases {
                create: Arc::new(StubSocialUseCase),
                get_list: Arc::new(StubSocialUseCase),
                get_single: Arc::new(StubSocialUseCase),
                update: Arc::new(StubSocialUseCase),
                delete: Arc::new(StubSocialUseCase),
            },
            auth: AuthUseCases {
                login: Arc::new(StubLoginUseCase),
            },
        }
    }
}

impl TestAppStateBuilder {
    // ── Profile ──

    pub fn with_get_profile(mut self, uc: impl GetProfileUseCase + Send + Sync + 'static) -> Self {
        self.profile.get = Arc::new(uc);
        self
    }

    pub fn with_upsert_profile(
        mut self,
        uc: impl UpsertProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.profile.upsert = Arc::new(uc);
        self
    }

    pub fn with_patch_profile(
        mut self,
        uc: impl PatchProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.profile.patch = Arc::new(uc);
        self
    }

    // ── Projects ──

    pub fn with_create_project(
        mut self,
        uc: impl CreateProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.create = Arc::new(uc);
        self
    }

    pub fn with_get_projects(mut self, uc: impl GetProjectsUseCase + Send + Sync + 'static) -> Self {
        self.project.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_public_projects(
        mut self,
        uc: impl GetPublicProjectsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.get_public_list = Arc::new(uc);
        self
    }

    pub fn with_get_single_project(
        mut self,
        uc: impl GetSingleProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.get_single = Arc::new(uc);
        self
    }

    pub fn with_get_public_single_project(
        mut self,
        uc: impl GetPublicSingleProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.get_public_single = Arc::new(uc);
        self
    }

    pub fn with_update_project(
        mut self,
        uc: impl UpdateProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.update = Arc::new(uc);
        self
    }

    pub fn with_hard_delete_project(
        mut self,
        uc: impl HardDeleteProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.hard_delete = Arc::new(uc);
        self
    }

    // ── Socials ──

    pub fn with_create_social(
        mut self,
        uc: impl CreateSocialUseCase + Send + Sync + 'static,
    ) -> Self {
        self.social.create = Arc::new(uc);
        self
    }

    pub fn with_get_socials(mut self, uc: impl GetSocialsUseCase + Send + Sync + 'static) -> Self {
        self.social.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_social(mut self, uc: impl GetSocialUseCase + Send + Sync + 'static) -> Self {
        self.social.get_single = Arc::new(uc);
        self
    }

    pub fn with_update_social(
        mut self,
        uc: impl UpdateSocialUseCase + Send + Sync + 'static,
    ) -> Self {
        self.social.update = Arc::new(uc);
        self
    }

    pub fn with_delete_social(
        mut self,
        uc: impl DeleteSocialUseCase + Send + Sync + 'static,
    ) -> Self {
        self.social.delete = Arc::new(uc);
        self
    }

    // ── Auth ──

    pub fn with_login(mut self, uc: impl LoginUseCase + Send + Sync + 'static) -> Self {
        self.auth.login = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            profile: self.profile,
            project: self.project,
            social: self.social,
            auth: self.auth,
        })
    }
}

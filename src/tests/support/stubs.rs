use async_trait::async_trait;

use crate::auth::application::domain::LoginRequest;
use crate::auth::application::ports::incoming::use_cases::{LoginError, LoginResult, LoginUseCase};
use crate::profile::application::ports::incoming::use_cases::{
    GetProfileError, GetProfileUseCase, PatchProfileError, PatchProfileUseCase,
    UpsertProfileError, UpsertProfileUseCase,
};
use crate::profile::application::ports::outgoing::{PatchProfileData, ProfileData, ProfileResult};
use crate::project::application::ports::incoming::use_cases::{
    CreateProjectCommand, CreateProjectError, CreateProjectUseCase, GetProjectsError,
    GetProjectsUseCase, GetPublicProjectsUseCase, GetPublicSingleProjectError,
    GetPublicSingleProjectUseCase, GetSingleProjectError, GetSingleProjectUseCase,
    HardDeleteProjectError, HardDeleteProjectUseCase, UpdateProjectError, UpdateProjectUseCase,
};
use crate::project::application::ports::outgoing::ProjectResult;
use crate::social::application::domain::social_media::SocialMediaCommand;
use crate::social::application::ports::incoming::use_cases::{
    CreateSocialError, CreateSocialUseCase, DeleteSocialError, DeleteSocialUseCase,
    GetSocialError, GetSocialUseCase, GetSocialsError, GetSocialsUseCase, UpdateSocialError,
    UpdateSocialUseCase,
};
use crate::social::application::ports::outgoing::SocialMediaResult;

const NOT_USED: &str = "not used in this test";

// ─────────────────────────────────────────────
// Profile
// ─────────────────────────────────────────────

#[derive(Default, Clone)]
pub struct StubGetProfileUseCase;

#[async_trait]
impl GetProfileUseCase for StubGetProfileUseCase {
    async fn execute(&self) -> Result<ProfileResult, GetProfileError> {
        Err(GetProfileError::RepositoryError(NOT_USED.to_string()))
    }
}

#[derive(Default, Clone)]
pub struct StubUpsertProfileUseCase;

#[async_trait]
impl UpsertProfileUseCase for StubUpsertProfileUseCase {
    async fn execute(&self, _data: ProfileData) -> Result<ProfileResult, UpsertProfileError> {
        Err(UpsertProfileError::RepositoryError(NOT_USED.to_string()))
    }
}

#[derive(Default, Clone)]
pub struct StubPatchProfileUseCase;

#[async_trait]
impl PatchProfileUseCase for StubPatchProfileUseCase {
    async fn execute(&self, _data: PatchProfileData) -> Result<ProfileResult, PatchProfileError> {
        Err(PatchProfileError::RepositoryError(NOT_USED.to_string()))
    }
}

// ─────────────────────────────────────────────
// Projects
// ─────────────────────────────────────────────

#[derive(Default, Clone)]
pub struct StubCreateProjectUseCase;

#[async_trait]
impl CreateProjectUseCase for StubCreateProjectUseCase {
    async fn execute(
        &self,
        _command: CreateProjectCommand,
    ) -> Result<ProjectResult, CreateProjectError> {
        Err(CreateProjectError::RepositoryError(NOT_USED.to_string()))
    }
}

/// Empty listing for both the dashboard and the public reads.
#[derive(Default, Clone)]
pub struct StubGetProjectsUseCase;

#[async_trait]
impl GetProjectsUseCase for StubGetProjectsUseCase {
    async fn execute(&self) -> Result<Vec<ProjectResult>, GetProjectsError> {
        Ok(vec![])
    }
}

#[async_trait]
impl GetPublicProjectsUseCase for StubGetProjectsUseCase {
    async fn execute(&self) -> Result<Vec<ProjectResult>, GetProjectsError> {
        Ok(vec![])
    }
}

#[derive(Default, Clone)]
pub struct StubGetSingleProjectUseCase;

#[async_trait]
impl GetSingleProjectUseCase for StubGetSingleProjectUseCase {
    async fn execute(&self, _project_id: i32) -> Result<ProjectResult, GetSingleProjectError> {
        Err(GetSingleProjectError::NotFound)
    }
}

#[async_trait]
impl GetPublicSingleProjectUseCase for StubGetSingleProjectUseCase {
    async fn execute(
        &self,
        _project_id: i32,
    ) -> Result<ProjectResult, GetPublicSingleProjectError> {
        Err(GetPublicSingleProjectError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateProjectUseCase;

#[async_trait]
impl UpdateProjectUseCase for StubUpdateProjectUseCase {
    async fn execute(
        &self,
        _project_id: i32,
        _command: CreateProjectCommand,
    ) -> Result<ProjectResult, UpdateProjectError> {
        Err(UpdateProjectError::ProjectNotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubHardDeleteProjectUseCase;

#[async_trait]
impl HardDeleteProjectUseCase for StubHardDeleteProjectUseCase {
    async fn execute(&self, _project_id: i32) -> Result<(), HardDeleteProjectError> {
        Err(HardDeleteProjectError::ProjectNotFound)
    }
}

// ─────────────────────────────────────────────
// Socials
// ─────────────────────────────────────────────

#[derive(Default, Clone)]
pub struct StubSocialUseCase;

#[async_trait]
impl CreateSocialUseCase for StubSocialUseCase {
    async fn execute(
        &self,
        _command: SocialMediaCommand,
    ) -> Result<SocialMediaResult, CreateSocialError> {
        Err(CreateSocialError::RepositoryError(NOT_USED.to_string()))
    }
}

#[async_trait]
impl GetSocialsUseCase for StubSocialUseCase {
    async fn execute(&self) -> Result<Vec<SocialMediaResult>, GetSocialsError> {
        Ok(vec![])
    }
}

#[async_trait]
impl GetSocialUseCase for StubSocialUseCase {
    async fn execute(&self, _id: i32) -> Result<SocialMediaResult, GetSocialError> {
        Err(GetSocialError::NotFound)
    }
}

#[async_trait]
impl UpdateSocialUseCase for StubSocialUseCase {
    async fn execute(
        &self,
        _id: i32,
        _command: SocialMediaCommand,
    ) -> Result<SocialMediaResult, UpdateSocialError> {
        Err(UpdateSocialError::NotFound)
    }
}

#[async_trait]
impl DeleteSocialUseCase for StubSocialUseCase {
    async fn execute(&self, _id: i32) -> Result<(), DeleteSocialError> {
        Err(DeleteSocialError::NotFound)
    }
}

// ─────────────────────────────────────────────
// Auth
// ─────────────────────────────────────────────

/// Rejects every login.
#[derive(Default, Clone)]
pub struct StubLoginUseCase;

#[async_trait]
impl LoginUseCase for StubLoginUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginResult, LoginError> {
        Err(LoginError::InvalidCredentials)
    }
}

use async_trait::async_trait;
use tracing::info;

use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectCommand, CreateProjectError, CreateProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::project_repository::{
    ProjectRepository, ProjectResult,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct CreateProjectService<R>
where
    R: ProjectRepository,
{
    project_repository: R,
}

impl<R> CreateProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repository: R) -> Self {
        Self { project_repository }
    }
}

#[async_trait]
impl<R> CreateProjectUseCase for CreateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateProjectCommand,
    ) -> Result<ProjectResult, CreateProjectError> {
        let created = self
            .project_repository
            .create_project(command.into_data())
            .await?;

        info!("Project {} created", created.id);
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use crate::modules::project::application::ports::outgoing::project_repository::{
        ProjectData, ProjectRepositoryError,
    };
    use crate::tests::support::fixtures::project_result;

    #[derive(Clone, Default)]
    struct MockProjectRepository {
        created: Arc<Mutex<Vec<ProjectData>>>,
        should_fail: bool,
    }

    #[async_trait]
    impl ProjectRepository for MockProjectRepository {
        async fn create_project(
            &self,
            data: ProjectData,
        ) -> Result<ProjectResult, ProjectRepositoryError> {
            if self.should_fail {
                return Err(ProjectRepositoryError::DatabaseError(
                    "insert failed".to_string(),
                ));
            }
            self.created.lock().unwrap().push(data.clone());
            Ok(project_result(7, data))
        }

        async fn replace_project(
            &self,
            _project_id: i32,
            _data: ProjectData,
        ) -> Result<ProjectResult, ProjectRepositoryError> {
            unimplemented!("not used")
        }
    }

    fn command() -> CreateProjectCommand {
        CreateProjectCommand::new(ProjectData {
            title: "Inventory Platform".to_string(),
            description: "Tracks stock".to_string(),
            technologies: vec!["Rust".to_string()],
            ..Default::default()
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_create_project_success() {
        let repo = MockProjectRepository::default();
        let service = CreateProjectService::new(repo.clone());

        let result = service.execute(command()).await.unwrap();

        assert_eq!(result.id, 7);
        assert_eq!(result.title, "Inventory Platform");
        assert_eq!(result.status, "draft");
        assert_eq!(repo.created.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_project_repository_error() {
        let repo = MockProjectRepository {
            should_fail: true,
            ..Default::default()
        };
        let service = CreateProjectService::new(repo);

        let result = service.execute(command()).await;

        assert!(matches!(
            result,
            Err(CreateProjectError::RepositoryError(msg)) if msg.contains("insert failed")
        ));
    }
}

use async_trait::async_trait;
use tracing::info;

use crate::modules::project::application::ports::incoming::use_cases::{
    HardDeleteProjectError, HardDeleteProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::project_archiver::ProjectArchiver;

pub struct HardDeleteProjectService<A>
where
    A: ProjectArchiver,
{
    archiver: A,
}

impl<A> HardDeleteProjectService<A>
where
    A: ProjectArchiver,
{
    pub fn new(archiver: A) -> Self {
        Self { archiver }
    }
}

#[async_trait]
impl<A> HardDeleteProjectUseCase for HardDeleteProjectService<A>
where
    A: ProjectArchiver + Send + Sync,
{
    async fn execute(&self, project_id: i32) -> Result<(), HardDeleteProjectError> {
        self.archiver.hard_delete(project_id).await?;
        info!(project_id, "Project permanently deleted");
        Ok(())
    }
}

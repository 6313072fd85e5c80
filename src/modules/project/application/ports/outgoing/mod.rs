pub mod project_archiver;
pub mod project_query;
pub mod project_repository;

pub use project_archiver::{ProjectArchiver, ProjectArchiverError};
pub use project_query::{ProjectQuery, ProjectQueryError, ProjectVisibility};
pub use project_repository::{
    ProjectData, ProjectRepository, ProjectRepositoryError, ProjectResult,
};

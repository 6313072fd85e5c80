//! Mutex-backed port implementations for service and end-to-end tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use crate::profile::application::ports::outgoing::{
    PatchProfileData, ProfileData, ProfileRepository, ProfileRepositoryError, ProfileResult,
};
use crate::project::application::ports::outgoing::{
    ProjectArchiver, ProjectArchiverError, ProjectData, ProjectQuery, ProjectQueryError,
    ProjectRepository, ProjectRepositoryError, ProjectResult, ProjectVisibility,
};
use crate::social::application::domain::social_media::SocialMediaCommand;
use crate::social::application::ports::outgoing::{
    SocialMediaResult, SocialRepository, SocialRepositoryError,
};
use crate::tests::support::fixtures::{profile_result, project_result};

const DB_DOWN: &str = "connection refused";

// ─────────────────────────────────────────────
// Socials
// ─────────────────────────────────────────────

#[derive(Default)]
struct SocialTable {
    rows: Vec<SocialMediaResult>,
    next_id: i32,
}

/// Clones share the same table and call counter.
#[derive(Clone, Default)]
pub struct InMemorySocialRepository {
    table: Arc<Mutex<SocialTable>>,
    calls: Arc<AtomicUsize>,
    failing: bool,
}

impl InMemorySocialRepository {
    pub fn with_rows(rows: Vec<SocialMediaResult>) -> Self {
        let next_id = rows.iter().map(|r| r.id).max().unwrap_or(0);
        Self {
            table: Arc::new(Mutex::new(SocialTable { rows, next_id })),
            ..Default::default()
        }
    }

    /// Every call fails with a database error.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Default::default()
        }
    }

    /// Number of repository calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn enter(&self) -> Result<std::sync::MutexGuard<'_, SocialTable>, SocialRepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing {
            return Err(SocialRepositoryError::DatabaseError(DB_DOWN.to_string()));
        }
        Ok(self.table.lock().unwrap())
    }
}

fn social_row(id: i32, command: &SocialMediaCommand) -> SocialMediaResult {
    SocialMediaResult {
        id,
        name: command.name().to_string(),
        url: command.url().to_string(),
        icon: command.icon().to_string(),
    }
}

#[async_trait]
impl SocialRepository for InMemorySocialRepository {
    async fn list(&self) -> Result<Vec<SocialMediaResult>, SocialRepositoryError> {
        let table = self.enter()?;
        let mut rows = table.rows.clone();
        rows.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(rows)
    }

    async fn get(&self, id: i32) -> Result<SocialMediaResult, SocialRepositoryError> {
        let table = self.enter()?;
        table
            .rows
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or(SocialRepositoryError::NotFound)
    }

    async fn create(
        &self,
        command: SocialMediaCommand,
    ) -> Result<SocialMediaResult, SocialRepositoryError> {
        let mut table = self.enter()?;
        table.next_id += 1;
        let row = social_row(table.next_id, &command);
        table.rows.push(row.clone());
        Ok(row)
    }

    async fn update(
        &self,
        id: i32,
        command: SocialMediaCommand,
    ) -> Result<SocialMediaResult, SocialRepositoryError> {
        let mut table = self.enter()?;
        let row = table
            .rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(SocialRepositoryError::NotFound)?;
        *row = social_row(id, &command);
        Ok(row.clone())
    }

    async fn delete(&self, id: i32) -> Result<(), SocialRepositoryError> {
        let mut table = self.enter()?;
        let before = table.rows.len();
        table.rows.retain(|r| r.id != id);
        if table.rows.len() == before {
            return Err(SocialRepositoryError::NotFound);
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────
// Profile
// ─────────────────────────────────────────────

/// Single-row profile store.
#[derive(Clone, Default)]
pub struct InMemoryProfileRepository {
    row: Arc<Mutex<Option<ProfileResult>>>,
}

impl InMemoryProfileRepository {
    pub fn stored(&self) -> Option<ProfileResult> {
        self.row.lock().unwrap().clone()
    }

    fn write(&self, data: ProfileData) -> ProfileResult {
        let mut row = self.row.lock().unwrap();
        let now = Utc::now();
        let created_at = row.as_ref().map(|r| r.created_at).unwrap_or(now);

        let mut result = profile_result(data);
        result.created_at = created_at;
        result.updated_at = now;
        *row = Some(result.clone());
        result
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn get_or_create(&self) -> Result<ProfileResult, ProfileRepositoryError> {
        if let Some(existing) = self.stored() {
            return Ok(existing);
        }
        Ok(self.write(ProfileData::default()))
    }

    async fn upsert(&self, data: ProfileData) -> Result<ProfileResult, ProfileRepositoryError> {
        Ok(self.write(data))
    }

    async fn patch(
        &self,
        data: PatchProfileData,
    ) -> Result<ProfileResult, ProfileRepositoryError> {
        let base = self
            .stored()
            .map(|r| r.data())
            .unwrap_or_default();
        Ok(self.write(data.apply_to(base)))
    }
}

// ─────────────────────────────────────────────
// Projects
// ─────────────────────────────────────────────

#[derive(Default)]
struct ProjectTable {
    rows: Vec<ProjectResult>,
    next_id: i32,
}

/// Implements the command, query and archiver ports over one shared table.
#[derive(Clone, Default)]
pub struct InMemoryProjectStore {
    table: Arc<Mutex<ProjectTable>>,
}

impl InMemoryProjectStore {
    pub fn len(&self) -> usize {
        self.table.lock().unwrap().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn visible(row: &ProjectResult, visibility: ProjectVisibility) -> bool {
    match visibility {
        ProjectVisibility::All => true,
        ProjectVisibility::PublishedOnly => row.published,
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectStore {
    async fn create_project(
        &self,
        data: ProjectData,
    ) -> Result<ProjectResult, ProjectRepositoryError> {
        let mut table = self.table.lock().unwrap();
        table.next_id += 1;

        let now = Utc::now();
        let mut row = project_result(table.next_id, data);
        row.created_at = now;
        row.updated_at = now;

        table.rows.push(row.clone());
        Ok(row)
    }

    async fn replace_project(
        &self,
        project_id: i32,
        data: ProjectData,
    ) -> Result<ProjectResult, ProjectRepositoryError> {
        let mut table = self.table.lock().unwrap();
        let row = table
            .rows
            .iter_mut()
            .find(|r| r.id == project_id)
            .ok_or(ProjectRepositoryError::NotFound)?;

        let mut replaced = project_result(project_id, data);
        replaced.created_at = row.created_at;
        replaced.updated_at = Utc::now();
        *row = replaced.clone();
        Ok(replaced)
    }
}

#[async_trait]
impl ProjectQuery for InMemoryProjectStore {
    async fn list_projects(
        &self,
        visibility: ProjectVisibility,
    ) -> Result<Vec<ProjectResult>, ProjectQueryError> {
        let table = self.table.lock().unwrap();
        let mut rows: Vec<ProjectResult> = table
            .rows
            .iter()
            .filter(|r| visible(r, visibility))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(rows)
    }

    async fn get_project(
        &self,
        project_id: i32,
        visibility: ProjectVisibility,
    ) -> Result<ProjectResult, ProjectQueryError> {
        let table = self.table.lock().unwrap();
        table
            .rows
            .iter()
            .find(|r| r.id == project_id && visible(r, visibility))
            .cloned()
            .ok_or(ProjectQueryError::NotFound)
    }
}

#[async_trait]
impl ProjectArchiver for InMemoryProjectStore {
    async fn hard_delete(&self, project_id: i32) -> Result<(), ProjectArchiverError> {
        let mut table = self.table.lock().unwrap();
        let before = table.rows.len();
        table.rows.retain(|r| r.id != project_id);
        if table.rows.len() == before {
            return Err(ProjectArchiverError::NotFound);
        }
        Ok(())
    }
}

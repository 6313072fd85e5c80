use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};
use std::sync::Arc;

use crate::modules::profile::adapter::outgoing::sea_orm_entity::{
    self as profile, ActiveModel, Column, Entity,
};
use crate::modules::profile::application::domain::entities::{
    DEFAULT_AVAILABILITY, PROFILE_ID,
};
use crate::modules::profile::application::ports::outgoing::{
    PatchProfileData, ProfileData, ProfileRepository, ProfileRepositoryError, ProfileResult,
};
use crate::shared::patch::PatchField;

/// Columns rewritten by a full upsert.
const WRITABLE_COLUMNS: [Column; 19] = [
    Column::Name,
    Column::Title,
    Column::Description,
    Column::Bio,
    Column::Avatar,
    Column::Email,
    Column::Phone,
    Column::Location,
    Column::Website,
    Column::Linkedin,
    Column::Github,
    Column::Resume,
    Column::Experience,
    Column::Availability,
    Column::Skills,
    Column::Languages,
    Column::Education,
    Column::Certificates,
    Column::UpdatedAt,
];

#[derive(Clone)]
pub struct ProfileRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn find_canonical(&self) -> Result<Option<profile::Model>, ProfileRepositoryError> {
        Entity::find_by_id(PROFILE_ID)
            .one(&*self.db)
            .await
            .map_err(map_db_err)
    }
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryPostgres {
    async fn get_or_create(&self) -> Result<ProfileResult, ProfileRepositoryError> {
        if let Some(model) = self.find_canonical().await? {
            return model_to_result(model);
        }

        // Concurrent first reads race here; ON CONFLICT keeps a single row
        let defaults = full_active_model(ProfileData::default())?;
        Entity::insert(defaults)
            .on_conflict(OnConflict::column(Column::Id).do_nothing().to_owned())
            .exec_without_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let model = self.find_canonical().await?.ok_or_else(|| {
            ProfileRepositoryError::DatabaseError("profile row missing after insert".to_string())
        })?;

        model_to_result(model)
    }

    async fn upsert(&self, data: ProfileData) -> Result<ProfileResult, ProfileRepositoryError> {
        let model = full_active_model(data)?;

        let stored = Entity::insert(model)
            .on_conflict(
                OnConflict::column(Column::Id)
                    .update_columns(WRITABLE_COLUMNS)
                    .to_owned(),
            )
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        model_to_result(stored)
    }

    async fn patch(
        &self,
        data: PatchProfileData,
    ) -> Result<ProfileResult, ProfileRepositoryError> {
        // Make sure there is a row to update
        let current = self.get_or_create().await?;

        if data.is_empty() {
            return Ok(current);
        }

        let model = patch_active_model(data)?;

        let updated = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(PROFILE_ID))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let model = updated.into_iter().next().ok_or_else(|| {
            ProfileRepositoryError::DatabaseError("profile row vanished during patch".to_string())
        })?;

        model_to_result(model)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn full_active_model(data: ProfileData) -> Result<ActiveModel, ProfileRepositoryError> {
    Ok(ActiveModel {
        id: Set(PROFILE_ID),
        name: Set(data.name),
        title: Set(data.title),
        description: Set(data.description),
        bio: Set(data.bio),
        avatar: Set(data.avatar),
        email: Set(data.email),
        phone: Set(data.phone),
        location: Set(data.location),
        website: Set(data.website),
        linkedin: Set(data.linkedin),
        github: Set(data.github),
        resume: Set(data.resume),
        experience: Set(data.experience),
        availability: Set(data.availability),
        skills: Set(to_json(&data.skills)?),
        languages: Set(to_json(&data.languages)?),
        education: Set(to_json(&data.education)?),
        certificates: Set(to_json(&data.certificates)?),
        updated_at: Set(Utc::now().fixed_offset()),
        ..Default::default()
    })
}

/// Only touched fields are set. Null resets to the column default.
fn patch_active_model(data: PatchProfileData) -> Result<ActiveModel, ProfileRepositoryError> {
    let mut model = <ActiveModel as Default>::default();

    if let Some(v) = text_patch(data.name) {
        model.name = Set(v);
    }
    if let Some(v) = text_patch(data.title) {
        model.title = Set(v);
    }
    if let Some(v) = text_patch(data.description) {
        model.description = Set(v);
    }
    if let Some(v) = text_patch(data.bio) {
        model.bio = Set(v);
    }
    if let Some(v) = text_patch(data.avatar) {
        model.avatar = Set(v);
    }
    if let Some(v) = text_patch(data.email) {
        model.email = Set(v);
    }
    if let Some(v) = text_patch(data.phone) {
        model.phone = Set(v);
    }
    if let Some(v) = text_patch(data.location) {
        model.location = Set(v);
    }
    if let Some(v) = text_patch(data.website) {
        model.website = Set(v);
    }
    if let Some(v) = text_patch(data.linkedin) {
        model.linkedin = Set(v);
    }
    if let Some(v) = text_patch(data.github) {
        model.github = Set(v);
    }
    if let Some(v) = text_patch(data.resume) {
        model.resume = Set(v);
    }
    if let Some(v) = text_patch(data.experience) {
        model.experience = Set(v);
    }

    match data.availability {
        PatchField::Unset => {}
        PatchField::Null => model.availability = Set(DEFAULT_AVAILABILITY.to_string()),
        PatchField::Value(v) => model.availability = Set(v),
    }

    if let Some(v) = array_patch(data.skills)? {
        model.skills = Set(v);
    }
    if let Some(v) = array_patch(data.languages)? {
        model.languages = Set(v);
    }
    if let Some(v) = array_patch(data.education)? {
        model.education = Set(v);
    }
    if let Some(v) = array_patch(data.certificates)? {
        model.certificates = Set(v);
    }

    model.updated_at = Set(Utc::now().fixed_offset());

    Ok(model)
}

fn text_patch(field: PatchField<String>) -> Option<String> {
    match field {
        PatchField::Unset => None,
        PatchField::Null => Some(String::new()),
        PatchField::Value(v) => Some(v),
    }
}

fn array_patch<T: serde::Serialize>(
    field: PatchField<Vec<T>>,
) -> Result<Option<serde_json::Value>, ProfileRepositoryError> {
    match field {
        PatchField::Unset => Ok(None),
        PatchField::Null => Ok(Some(serde_json::Value::Array(Vec::new()))),
        PatchField::Value(items) => to_json(&items).map(Some),
    }
}

fn model_to_result(model: profile::Model) -> Result<ProfileResult, ProfileRepositoryError> {
    Ok(ProfileResult {
        id: model.id,
        name: model.name,
        title: model.title,
        description: model.description,
        bio: model.bio,
        avatar: model.avatar,
        email: model.email,
        phone: model.phone,
        location: model.location,
        website: model.website,
        linkedin: model.linkedin,
        github: model.github,
        resume: model.resume,
        experience: model.experience,
        availability: model.availability,
        skills: from_json(&model.skills)?,
        languages: from_json(&model.languages)?,
        education: from_json(&model.education)?,
        certificates: from_json(&model.certificates)?,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn to_json<T: serde::Serialize>(data: &T) -> Result<serde_json::Value, ProfileRepositoryError> {
    serde_json::to_value(data)
        .map_err(|e| ProfileRepositoryError::SerializationError(e.to_string()))
}

fn from_json<T: serde::de::DeserializeOwned>(
    json: &serde_json::Value,
) -> Result<T, ProfileRepositoryError> {
    serde_json::from_value(json.clone())
        .map_err(|e| ProfileRepositoryError::SerializationError(e.to_string()))
}

fn map_db_err(e: DbErr) -> ProfileRepositoryError {
    ProfileRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================

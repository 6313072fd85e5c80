// src/modules/profile/application/ports/outgoing/profile_repository.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::profile::application::domain::entities::{
    Certificate, EducationEntry, DEFAULT_AVAILABILITY,
};
use crate::shared::patch::PatchField;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

/// Every writable profile field. A full upsert writes all of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileData {
    pub name: String,
    pub title: String,
    pub description: String,
    pub bio: String,
    pub avatar: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub website: String,
    pub linkedin: String,
    pub github: String,
    pub resume: String,
    pub experience: String,
    pub availability: String,

    /// Stored as JSONB arrays
    pub skills: Vec<String>,
    pub languages: Vec<String>,
    pub education: Vec<EducationEntry>,
    pub certificates: Vec<Certificate>,
}

impl Default for ProfileData {
    fn default() -> Self {
        Self {
            name: String::new(),
            title: String::new(),
            description: String::new(),
            bio: String::new(),
            avatar: String::new(),
            email: String::new(),
            phone: String::new(),
            location: String::new(),
            website: String::new(),
            linkedin: String::new(),
            github: String::new(),
            resume: String::new(),
            experience: String::new(),
            availability: DEFAULT_AVAILABILITY.to_string(),
            skills: Vec::new(),
            languages: Vec::new(),
            education: Vec::new(),
            certificates: Vec::new(),
        }
    }
}

/// Patch semantics:
/// - Unset => keep stored value
/// - Null => reset to the field default ("" / [] / "available")
/// - Value => replace (arrays are replaced whole, never merged)
#[derive(Debug, Clone, Default)]
pub struct PatchProfileData {
    pub name: PatchField<String>,
    pub title: PatchField<String>,
    pub description: PatchField<String>,
    pub bio: PatchField<String>,
    pub avatar: PatchField<String>,
    pub email: PatchField<String>,
    pub phone: PatchField<String>,
    pub location: PatchField<String>,
    pub website: PatchField<String>,
    pub linkedin: PatchField<String>,
    pub github: PatchField<String>,
    pub resume: PatchField<String>,
    pub experience: PatchField<String>,
    pub availability: PatchField<String>,
    pub skills: PatchField<Vec<String>>,
    pub languages: PatchField<Vec<String>>,
    pub education: PatchField<Vec<EducationEntry>>,
    pub certificates: PatchField<Vec<Certificate>>,
}

impl PatchProfileData {
    pub fn is_empty(&self) -> bool {
        self.name.is_unset()
            && self.title.is_unset()
            && self.description.is_unset()
            && self.bio.is_unset()
            && self.avatar.is_unset()
            && self.email.is_unset()
            && self.phone.is_unset()
            && self.location.is_unset()
            && self.website.is_unset()
            && self.linkedin.is_unset()
            && self.github.is_unset()
            && self.resume.is_unset()
            && self.experience.is_unset()
            && self.availability.is_unset()
            && self.skills.is_unset()
            && self.languages.is_unset()
            && self.education.is_unset()
            && self.certificates.is_unset()
    }

    /// Applies the patch on top of `base`, field by field.
    pub fn apply_to(self, base: ProfileData) -> ProfileData {
        ProfileData {
            name: self.name.resolve(base.name, String::new),
            title: self.title.resolve(base.title, String::new),
            description: self.description.resolve(base.description, String::new),
            bio: self.bio.resolve(base.bio, String::new),
            avatar: self.avatar.resolve(base.avatar, String::new),
            email: self.email.resolve(base.email, String::new),
            phone: self.phone.resolve(base.phone, String::new),
            location: self.location.resolve(base.location, String::new),
            website: self.website.resolve(base.website, String::new),
            linkedin: self.linkedin.resolve(base.linkedin, String::new),
            github: self.github.resolve(base.github, String::new),
            resume: self.resume.resolve(base.resume, String::new),
            experience: self.experience.resolve(base.experience, String::new),
            availability: self
                .availability
                .resolve(base.availability, || DEFAULT_AVAILABILITY.to_string()),
            skills: self.skills.resolve(base.skills, Vec::new),
            languages: self.languages.resolve(base.languages, Vec::new),
            education: self.education.resolve(base.education, Vec::new),
            certificates: self.certificates.resolve(base.certificates, Vec::new),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResult {
    #[schema(example = 1)]
    pub id: i32,
    pub name: String,
    pub title: String,
    pub description: String,
    pub bio: String,
    pub avatar: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub website: String,
    pub linkedin: String,
    pub github: String,
    pub resume: String,
    pub experience: String,
    #[schema(example = "available")]
    pub availability: String,
    pub skills: Vec<String>,
    pub languages: Vec<String>,
    pub education: Vec<EducationEntry>,
    pub certificates: Vec<Certificate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProfileResult {
    /// Writable part of the stored record, e.g. to compare two reads.
    pub fn data(&self) -> ProfileData {
        ProfileData {
            name: self.name.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            bio: self.bio.clone(),
            avatar: self.avatar.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            location: self.location.clone(),
            website: self.website.clone(),
            linkedin: self.linkedin.clone(),
            github: self.github.clone(),
            resume: self.resume.clone(),
            experience: self.experience.clone(),
            availability: self.availability.clone(),
            skills: self.skills.clone(),
            languages: self.languages.clone(),
            education: self.education.clone(),
            certificates: self.certificates.clone(),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProfileRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (single-row profile table)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Returns the canonical profile, inserting the empty default row when absent.
    async fn get_or_create(&self) -> Result<ProfileResult, ProfileRepositoryError>;

    /// Full-record upsert on the canonical key: every field is overwritten.
    async fn upsert(&self, data: ProfileData) -> Result<ProfileResult, ProfileRepositoryError>;

    /// Partial update on the canonical key. A missing row is created from defaults first.
    async fn patch(&self, data: PatchProfileData)
        -> Result<ProfileResult, ProfileRepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_data_is_available_and_empty() {
        let data = ProfileData::default();
        assert_eq!(data.availability, "available");
        assert!(data.name.is_empty());
        assert!(data.skills.is_empty());
        assert!(data.certificates.is_empty());
    }

    #[test]
    fn test_empty_patch_is_detected() {
        assert!(PatchProfileData::default().is_empty());

        let patch = PatchProfileData {
            skills: PatchField::Null,
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }

    #[test]
    fn test_apply_keeps_unset_and_resets_null() {
        let base = ProfileData {
            name: "Ada".to_string(),
            title: "Engineer".to_string(),
            availability: "busy".to_string(),
            skills: vec!["Rust".to_string()],
            ..Default::default()
        };

        let patch = PatchProfileData {
            title: PatchField::Value("Architect".to_string()),
            availability: PatchField::Null,
            skills: PatchField::Value(vec!["Go".to_string(), "SQL".to_string()]),
            ..Default::default()
        };

        let patched = patch.apply_to(base);

        assert_eq!(patched.name, "Ada");
        assert_eq!(patched.title, "Architect");
        assert_eq!(patched.availability, "available");
        assert_eq!(patched.skills, vec!["Go".to_string(), "SQL".to_string()]);
    }
}

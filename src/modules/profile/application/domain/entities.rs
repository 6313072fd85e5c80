use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Key of the single canonical profile row.
pub const PROFILE_ID: i32 = 1;

pub const DEFAULT_AVAILABILITY: &str = "available";

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, ToSchema)]
#[serde(default)]
pub struct EducationEntry {
    #[schema(example = "BSc Computer Science")]
    pub degree: String,
    #[schema(example = "Universitas Indonesia")]
    pub institution: String,
    #[schema(example = "2020")]
    pub year: String,
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, ToSchema)]
#[serde(default)]
pub struct Certificate {
    #[schema(example = "AWS Certified Developer")]
    pub title: String,
    #[schema(example = "Amazon Web Services")]
    pub issuer: String,
    #[schema(example = "2023")]
    pub year: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

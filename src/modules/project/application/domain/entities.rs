use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const DEFAULT_STATUS: &str = "draft";

/// Matches the `projects.title` column width.
pub const MAX_TITLE_LEN: usize = 200;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, ToSchema)]
#[serde(default)]
pub struct Testimonial {
    #[schema(example = "Delivered ahead of schedule.")]
    pub text: String,
    #[schema(example = "Jane Doe")]
    pub author: String,
    #[schema(example = "CTO, Acme")]
    pub role: String,
}

// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

/// `{"success": true, "data": ...}`
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
}

/// `{"success": false, "error": {"code", "message"}}`
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// One of `INVALID_ID`, `VALIDATION_ERROR`, `INVALID_CREDENTIALS`,
    /// `INVALID_TOKEN`, `MISSING_AUTH_HEADER`, `PROJECT_NOT_FOUND`,
    /// `SOCIAL_NOT_FOUND`, `INTERNAL_ERROR`
    #[schema(example = "SOCIAL_NOT_FOUND")]
    pub code: String,

    #[schema(example = "Social media link not found")]
    pub message: String,
}

mod json_config;
mod record_id;
mod response;

pub use json_config::{custom_json_config, parse_json_body};
pub use record_id::parse_record_id;
pub use response::{ApiError, ApiResponse};

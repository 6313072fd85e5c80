pub mod admin;
pub mod login_request;

pub use admin::{AdminCredentials, AdminSession};
pub use login_request::{LoginRequest, LoginRequestError};

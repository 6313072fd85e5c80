pub mod auth;
pub mod profile;
pub mod project;
pub mod social;

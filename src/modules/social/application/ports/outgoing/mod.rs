mod social_repository;

pub use social_repository::{SocialMediaResult, SocialRepository, SocialRepositoryError};

pub mod sea_orm_entity;
mod social_repository_postgres;

pub use social_repository_postgres::SocialRepositoryPostgres;

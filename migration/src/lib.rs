pub use sea_orm_migration::prelude::*;

mod m20250901_000001_create_updated_at_function;
mod m20250901_000002_create_table_profile;
mod m20250901_000003_create_table_projects;
mod m20250901_000004_create_table_social_media;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250901_000001_create_updated_at_function::Migration),
            Box::new(m20250901_000002_create_table_profile::Migration),
            Box::new(m20250901_000003_create_table_projects::Migration),
            Box::new(m20250901_000004_create_table_social_media::Migration),
        ]
    }
}

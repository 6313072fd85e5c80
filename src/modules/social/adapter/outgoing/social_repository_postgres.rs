use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;

use crate::modules::social::adapter::outgoing::sea_orm_entity::{
    self as social_media, ActiveModel, Column, Entity,
};
use crate::modules::social::application::domain::social_media::SocialMediaCommand;
use crate::modules::social::application::ports::outgoing::{
    SocialMediaResult, SocialRepository, SocialRepositoryError,
};

#[derive(Clone)]
pub struct SocialRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SocialRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SocialRepository for SocialRepositoryPostgres {
    async fn list(&self) -> Result<Vec<SocialMediaResult>, SocialRepositoryError> {
        let rows = Entity::find()
            .order_by_desc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(model_to_result).collect())
    }

    async fn get(&self, id: i32) -> Result<SocialMediaResult, SocialRepositoryError> {
        Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(model_to_result)
            .ok_or(SocialRepositoryError::NotFound)
    }

    async fn create(
        &self,
        command: SocialMediaCommand,
    ) -> Result<SocialMediaResult, SocialRepositoryError> {
        let model = ActiveModel {
            name: Set(command.name().to_string()),
            url: Set(command.url().to_string()),
            icon: Set(command.icon().to_string()),
            ..Default::default()
        };

        let created = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(model_to_result(created))
    }

    async fn update(
        &self,
        id: i32,
        command: SocialMediaCommand,
    ) -> Result<SocialMediaResult, SocialRepositoryError> {
        let model = ActiveModel {
            name: Set(command.name().to_string()),
            url: Set(command.url().to_string()),
            icon: Set(command.icon().to_string()),
            ..Default::default()
        };

        let updated = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        updated
            .into_iter()
            .next()
            .map(model_to_result)
            .ok_or(SocialRepositoryError::NotFound)
    }

    async fn delete(&self, id: i32) -> Result<(), SocialRepositoryError> {
        let res = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if res.rows_affected == 0 {
            return Err(SocialRepositoryError::NotFound);
        }

        Ok(())
    }
}

fn model_to_result(model: social_media::Model) -> SocialMediaResult {
    SocialMediaResult {
        id: model.id,
        name: model.name,
        url: model.url,
        icon: model.icon,
    }
}

fn map_db_err(e: DbErr) -> SocialRepositoryError {
    SocialRepositoryError::DatabaseError(e.to_string())
}

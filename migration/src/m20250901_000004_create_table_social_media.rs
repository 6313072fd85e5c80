use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SocialMedia::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SocialMedia::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SocialMedia::Name).string_len(100).not_null())
                    .col(ColumnDef::new(SocialMedia::Url).text().not_null())
                    .col(
                        ColumnDef::new(SocialMedia::Icon)
                            .string_len(100)
                            .not_null()
                            .default(""),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SocialMedia::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SocialMedia {
    Table,
    Id,
    Name,
    Url,
    Icon,
}

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create profile table (single row, id = 1)
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Profile::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Profile::Id)
                            .integer()
                            .not_null()
                            .primary_key()
                            .default(1)
                            .check(Expr::col(Profile::Id).eq(1)),
                    )
                    .col(text_col(Profile::Name))
                    .col(text_col(Profile::Title))
                    .col(text_col(Profile::Description))
                    .col(text_col(Profile::Bio))
                    .col(text_col(Profile::Avatar))
                    .col(text_col(Profile::Email))
                    .col(text_col(Profile::Phone))
                    .col(text_col(Profile::Location))
                    .col(text_col(Profile::Website))
                    .col(text_col(Profile::Linkedin))
                    .col(text_col(Profile::Github))
                    .col(text_col(Profile::Resume))
                    .col(text_col(Profile::Experience))
                    .col(
                        ColumnDef::new(Profile::Availability)
                            .string_len(50)
                            .not_null()
                            .default("available"),
                    )
                    .col(json_array_col(Profile::Skills))
                    .col(json_array_col(Profile::Languages))
                    .col(json_array_col(Profile::Education))
                    .col(json_array_col(Profile::Certificates))
                    .col(
                        ColumnDef::new(Profile::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Profile::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_profile_updated_at
                BEFORE UPDATE ON profile
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TRIGGER IF EXISTS update_profile_updated_at ON profile")
            .await?;

        manager
            .drop_table(Table::drop().table(Profile::Table).to_owned())
            .await
    }
}

fn text_col(col: Profile) -> ColumnDef {
    ColumnDef::new(col).text().not_null().default("").to_owned()
}

fn json_array_col(col: Profile) -> ColumnDef {
    ColumnDef::new(col)
        .json_binary()
        .not_null()
        .default(Expr::cust("'[]'::jsonb"))
        .to_owned()
}

#[derive(DeriveIden)]
enum Profile {
    Table,
    Id,
    Name,
    Title,
    Description,
    Bio,
    Avatar,
    Email,
    Phone,
    Location,
    Website,
    Linkedin,
    Github,
    Resume,
    Experience,
    Availability,
    Skills,
    Languages,
    Education,
    Certificates,
    CreatedAt,
    UpdatedAt,
}

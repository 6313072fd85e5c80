use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create projects table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Projects::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Projects::Title).string_len(200).not_null())
                    .col(text_col(Projects::Category))
                    .col(ColumnDef::new(Projects::Description).text().not_null())
                    .col(text_col(Projects::FullDescription))
                    .col(json_array_col(Projects::Technologies))
                    .col(json_array_col(Projects::Images))
                    .col(ColumnDef::new(Projects::Github).text())
                    .col(ColumnDef::new(Projects::Demo).text())
                    .col(
                        ColumnDef::new(Projects::Rating)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(text_col(Projects::Icon))
                    .col(text_col(Projects::Duration))
                    .col(text_col(Projects::Team))
                    .col(
                        ColumnDef::new(Projects::Status)
                            .string_len(50)
                            .not_null()
                            .default("draft"),
                    )
                    .col(json_array_col(Projects::Challenges))
                    .col(json_array_col(Projects::Solutions))
                    .col(json_array_col(Projects::Features))
                    .col(json_array_col(Projects::Objectives))
                    .col(json_array_col(Projects::Results))
                    .col(ColumnDef::new(Projects::Testimonial).json_binary())
                    .col(
                        ColumnDef::new(Projects::Published)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Projects::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Projects::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Listing is always newest first
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_projects_created_at
                ON projects (created_at DESC);
                "#,
            )
            .await?;

        // Public pages only ever read published rows
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_projects_published
                ON projects (created_at DESC)
                WHERE published = true;
                "#,
            )
            .await?;

        // =====================================================
        // updated_at trigger
        // =====================================================

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_projects_updated_at
                BEFORE UPDATE ON projects
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
            .execute_unprepared(
                r#"
                DROP TRIGGER IF EXISTS update_projects_updated_at ON projects;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_projects_created_at;
                DROP INDEX IF EXISTS idx_projects_published;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await
    }
}

fn text_col(col: Projects) -> ColumnDef {
    ColumnDef::new(col).text().not_null().default("").to_owned()
}

fn json_array_col(col: Projects) -> ColumnDef {
    ColumnDef::new(col)
        .json_binary()
        .not_null()
        .default(Expr::cust("'[]'::jsonb"))
        .to_owned()
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
    Title,
    Category,
    Description,
    FullDescription,
    Technologies,
    Images,
    Github,
    Demo,
    Rating,
    Icon,
    Duration,
    Team,
    Status,
    Challenges,
    Solutions,
    Features,
    Objectives,
    Results,
    Testimonial,
    Published,
    CreatedAt,
    UpdatedAt,
}

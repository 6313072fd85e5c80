use portfolio_backend::api::openapi::ApiDoc;
use portfolio_backend::auth::adapter::outgoing::jwt::JwtTokenService;
use portfolio_backend::auth::adapter::outgoing::security::Argon2Verifier;
use portfolio_backend::auth::application::auth_use_cases::AuthUseCases;
use portfolio_backend::auth::application::ports::outgoing::TokenProvider;
use portfolio_backend::auth::application::services::LoginService;
use portfolio_backend::config::AppConfig;
use portfolio_backend::profile::adapter::outgoing::ProfileRepositoryPostgres;
use portfolio_backend::profile::application::profile_use_cases::ProfileUseCases;
use portfolio_backend::profile::application::services::{
    GetProfileService, PatchProfileService, UpsertProfileService,
};
use portfolio_backend::project::adapter::outgoing::{
    ProjectArchiverPostgres, ProjectQueryPostgres, ProjectRepositoryPostgres,
};
use portfolio_backend::project::application::project_use_cases::ProjectUseCases;
use portfolio_backend::project::application::service::{
    CreateProjectService, GetProjectsService, GetPublicProjectsService,
    GetPublicSingleProjectService, GetSingleProjectService, HardDeleteProjectService,
    UpdateProjectService,
};
use portfolio_backend::shared::api::custom_json_config;
use portfolio_backend::social::adapter::outgoing::SocialRepositoryPostgres;
use portfolio_backend::social::application::services::{
    CreateSocialService, DeleteSocialService, GetSocialService, GetSocialsService,
    UpdateSocialService,
};
use portfolio_backend::social::application::social_use_cases::SocialUseCases;
use portfolio_backend::{init_routes, AppState};

use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

fn build_state(db: &Arc<DatabaseConnection>, config: &AppConfig, jwt: JwtTokenService) -> AppState {
    let profile_repo = ProfileRepositoryPostgres::new(Arc::clone(db));
    let project_repo = ProjectRepositoryPostgres::new(Arc::clone(db));
    let project_query = ProjectQueryPostgres::new(Arc::clone(db));
    let project_archiver = ProjectArchiverPostgres::new(Arc::clone(db));
    let social_repo = SocialRepositoryPostgres::new(Arc::clone(db));

    AppState {
        profile: ProfileUseCases {
            get: Arc::new(GetProfileService::new(profile_repo.clone())),
            upsert: Arc::new(UpsertProfileService::new(profile_repo.clone())),
            patch: Arc::new(PatchProfileService::new(profile_repo)),
        },
        project: ProjectUseCases {
            create: Arc::new(CreateProjectService::new(project_repo.clone())),
            get_list: Arc::new(GetProjectsService::new(project_query.clone())),
            get_single: Arc::new(GetSingleProjectService::new(project_query.clone())),
            get_public_list: Arc::new(GetPublicProjectsService::new(project_query.clone())),
            get_public_single: Arc::new(GetPublicSingleProjectService::new(project_query)),
            update: Arc::new(UpdateProjectService::new(project_repo)),
            hard_delete: Arc::new(HardDeleteProjectService::new(project_archiver)),
        },
        social: SocialUseCases {
            create: Arc::new(CreateSocialService::new(social_repo.clone())),
            get_list: Arc::new(GetSocialsService::new(social_repo.clone())),
            get_single: Arc::new(GetSocialService::new(social_repo.clone())),
            update: Arc::new(UpdateSocialService::new(social_repo.clone())),
            delete: Arc::new(DeleteSocialService::new(social_repo)),
        },
        auth: AuthUseCases {
            login: Arc::new(LoginService::new(
                config.admin.clone(),
                Argon2Verifier::new(),
                jwt,
            )),
        },
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Try .env.{environment} first, then fall back to .env
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env().context("Invalid configuration")?;
    let server_url = config.server_url();

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.db_max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    if config.run_migrations {
        info!("Running migrations");
        Migrator::up(&conn, None)
            .await
            .context("Migration failed")?;
    }

    let db_arc = Arc::new(conn);

    let jwt_service = JwtTokenService::new(config.jwt.clone());
    let state = build_state(&db_arc, &config, jwt_service.clone());
    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);
    let openapi = ApiDoc::openapi();

    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(custom_json_config())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind(&server_url)
    .with_context(|| format!("Failed to bind {server_url}"))?
    .run()
    .await
    .context("Server error")?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}

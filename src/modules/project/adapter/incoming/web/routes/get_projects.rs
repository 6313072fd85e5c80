use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::project::application::ports::incoming::use_cases::GetProjectsError;
use crate::modules::project::application::ports::outgoing::project_repository::ProjectResult;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List all projects, newest first
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "projects",
    responses(
        (status = 200, description = "Projects, drafts included", body = inline(SuccessResponse<Vec<ProjectResult>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/projects")]
pub async fn get_projects_handler(data: web::Data<AppState>) -> impl Responder {
    match data.project.get_list.execute().await {
        Ok(projects) => ApiResponse::success(projects),
        Err(GetProjectsError::QueryError(e)) => {
            error!("Failed to list projects: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value;

    use crate::modules::project::application::ports::incoming::use_cases::GetProjectsUseCase;
    use crate::modules::project::application::ports::outgoing::project_repository::ProjectData;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fixtures::project_result;

    struct MockGetProjects {
        result: Result<Vec<ProjectResult>, GetProjectsError>,
    }

    #[async_trait]
    impl GetProjectsUseCase for MockGetProjects {
        async fn execute(&self) -> Result<Vec<ProjectResult>, GetProjectsError> {
            self.result.clone()
        }
    }

    #[actix_web::test]
    async fn test_get_projects_returns_list() {
        let state = TestAppStateBuilder::default()
            .with_get_projects(MockGetProjects {
                result: Ok(vec![
                    project_result(2, ProjectData::default()),
                    project_result(1, ProjectData::default()),
                ]),
            })
            .build();

        let app = test::init_service(App::new().app_data(state).service(get_projects_handler)).await;

        let req = test::TestRequest::get().uri("/api/projects").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 2);
        assert_eq!(body["data"][0]["id"], 2);
    }

    #[actix_web::test]
    async fn test_get_projects_empty_list() {
        let state = TestAppStateBuilder::default()
            .with_get_projects(MockGetProjects { result: Ok(vec![]) })
            .build();

        let app = test::init_service(App::new().app_data(state).service(get_projects_handler)).await;

        let req = test::TestRequest::get().uri("/api/projects").to_request();
        let resp = test::call_service(&app, req).await;

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"], serde_json::json!([]));
    }

    #[actix_web::test]
    async fn test_get_projects_error() {
        let state = TestAppStateBuilder::default()
            .with_get_projects(MockGetProjects {
                result: Err(GetProjectsError::QueryError("boom".to_string())),
            })
            .build();

        let app = test::init_service(App::new().app_data(state).service(get_projects_handler)).await;

        let req = test::TestRequest::get().uri("/api/projects").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

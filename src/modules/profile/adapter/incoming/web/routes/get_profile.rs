use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::profile::application::ports::incoming::use_cases::GetProfileError;
use crate::modules::profile::application::ports::outgoing::ProfileResult;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get the portfolio profile
///
/// Returns the single canonical profile. An empty profile is created on first read.
#[utoipa::path(
    get,
    path = "/api/profile",
    tag = "profile",
    responses(
        (status = 200, description = "Profile", body = inline(SuccessResponse<ProfileResult>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/profile")]
pub async fn get_profile_handler(data: web::Data<AppState>) -> impl Responder {
    match data.profile.get.execute().await {
        Ok(profile) => ApiResponse::success(profile),
        Err(GetProfileError::RepositoryError(e)) => {
            error!("Failed to load profile: {}", e);
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

    use crate::modules::profile::application::ports::incoming::use_cases::GetProfileUseCase;
    use crate::modules::profile::application::ports::outgoing::ProfileData;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fixtures::profile_result;

    #[derive(Clone)]
    struct MockGetProfileUseCase {
        result: Result<ProfileResult, GetProfileError>,
    }

    #[async_trait]
    impl GetProfileUseCase for MockGetProfileUseCase {
        async fn execute(&self) -> Result<ProfileResult, GetProfileError> {
            self.result.clone()
        }
    }

    #[actix_web::test]
    async fn test_get_profile_success() {
        let state = TestAppStateBuilder::default()
            .with_get_profile(MockGetProfileUseCase {
                result: Ok(profile_result(ProfileData {
                    name: "Ada".to_string(),
                    skills: vec!["Rust".to_string()],
                    ..Default::default()
                })),
            })
            .build();

        let app = test::init_service(App::new().app_data(state).service(get_profile_handler)).await;

        let req = test::TestRequest::get().uri("/api/profile").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["id"], 1);
        assert_eq!(body["data"]["name"], "Ada");
        assert_eq!(body["data"]["availability"], "available");
        assert_eq!(body["data"]["skills"][0], "Rust");
        assert!(body["data"]["createdAt"].is_string());
    }

    #[actix_web::test]
    async fn test_get_profile_repository_error_is_generic_500() {
        let state = TestAppStateBuilder::default()
            .with_get_profile(MockGetProfileUseCase {
                result: Err(GetProfileError::RepositoryError(
                    "password authentication failed for user postgres".to_string(),
                )),
            })
            .build();

        let app = test::init_service(App::new().app_data(state).service(get_profile_handler)).await;

        let req = test::TestRequest::get().uri("/api/profile").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
        assert!(!body.to_string().contains("postgres"));
    }
}

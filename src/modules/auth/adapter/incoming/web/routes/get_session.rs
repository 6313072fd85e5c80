use actix_web::{get, Responder};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::application::domain::AdminSession;
use crate::shared::api::ApiResponse;

/// Current admin session
///
/// Echoes the session carried by the bearer token.
#[utoipa::path(
    get,
    path = "/api/auth/session",
    tag = "auth",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Session is valid", body = inline(SuccessResponse<AdminSession>)),
        (status = 401, description = "Missing, invalid or expired token", body = ErrorResponse),
    )
)]
#[get("/api/auth/session")]
pub async fn get_session_handler(session: AdminSession) -> impl Responder {
    ApiResponse::success(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App};
    use serde_json::Value;
    use std::sync::Arc;

    use crate::modules::auth::application::ports::outgoing::TokenProvider;
    use crate::tests::support::fixtures::test_jwt_service;

    fn token_data() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
        let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(test_jwt_service());
        web::Data::new(provider)
    }

    #[actix_web::test]
    async fn test_valid_token() {
        let token = test_jwt_service()
            .issue_session_token("ada@example.com")
            .unwrap()
            .token;

        let app = test::init_service(
            App::new()
                .app_data(token_data())
                .service(get_session_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/auth/session")
            .insert_header(("Authorization", format!("Bearer {token}")))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["email"], "ada@example.com");
        assert!(body["data"]["expiresAt"].is_string());
    }

    #[actix_web::test]
    async fn test_missing_header() {
        let app = test::init_service(
            App::new()
                .app_data(token_data())
                .service(get_session_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/auth/session").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "MISSING_AUTH_HEADER");
    }

    #[actix_web::test]
    async fn test_invalid_token() {
        let app = test::init_service(
            App::new()
                .app_data(token_data())
                .service(get_session_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/auth/session")
            .insert_header(("Authorization", "Bearer not.a.token"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_TOKEN");
    }
}

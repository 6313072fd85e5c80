use actix_web::{post, Responder};
use tracing::info;

use crate::shared::api::ApiResponse;

/// Admin logout
///
/// Sessions are stateless; the client discards its token.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    responses((status = 204, description = "Logged out"))
)]
#[post("/api/auth/logout")]
pub async fn logout_handler() -> impl Responder {
    info!("Admin logout");
    ApiResponse::no_content()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    #[actix_web::test]
    async fn test_logout_is_204() {
        let app = test::init_service(App::new().service(logout_handler)).await;

        let req = test::TestRequest::post().uri("/api/auth/logout").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    }
}

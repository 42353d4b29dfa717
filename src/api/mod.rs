pub mod health;
pub mod response;
pub mod swagger;
pub mod users;

use actix_web::{error, http::StatusCode, web, HttpResponse, ResponseError};

use crate::config::AppConfig;
use crate::utils::AppError;
use response::MessageResponse;

/// Route table compartilhada entre `main` e os testes.
///
/// O `UserStore` entra separado via `App::app_data`.
pub fn configure(config: AppConfig) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        let expose_details = config.expose_error_details;

        cfg.app_data(web::JsonConfig::default().error_handler(move |err, _req| {
            log::warn!("❌ Invalid JSON body: {}", err);
            let detail = expose_details.then(|| err.to_string());
            let response = MessageResponse::failure("Invalid JSON body")
                .with_error(detail)
                .into_response(StatusCode::BAD_REQUEST);
            error::InternalError::from_response(err, response).into()
        }))
        // Só chega aqui com dígitos (ver regex da rota): id > u64::MAX não existe
        .app_data(web::PathConfig::default().error_handler(|err, _req| {
            log::warn!("⚠️ Unparsable user id: {}", err);
            let response = AppError::NotFound("User not found".to_string()).error_response();
            error::InternalError::from_response(err, response).into()
        }))
        // Health check
        .service(
            web::resource("/health")
                .route(web::get().to(health::health_check))
                .route(web::head().to(health::health_check))
                .default_service(web::to(method_not_allowed)),
        )
        .service(
            web::resource("/api/health")
                .route(web::get().to(health::api_health_check))
                .route(web::head().to(health::api_health_check))
                .default_service(web::to(method_not_allowed)),
        )
        // Users
        .service(
            web::resource("/api/users")
                .route(web::get().to(users::list_users))
                .route(web::head().to(users::list_users))
                .route(web::post().to(users::create_user))
                .default_service(web::to(method_not_allowed)),
        )
        .service(
            web::resource("/api/users/{id:\\d+}")
                .route(web::get().to(users::get_user))
                .route(web::head().to(users::get_user))
                .default_service(web::to(method_not_allowed)),
        )
        .default_service(web::to(route_not_found));
    }
}

async fn route_not_found() -> HttpResponse {
    MessageResponse::failure("Route not found").into_response(StatusCode::NOT_FOUND)
}

async fn method_not_allowed() -> HttpResponse {
    MessageResponse::failure("Method not allowed").into_response(StatusCode::METHOD_NOT_ALLOWED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::UserStore;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_unknown_route_returns_envelope() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(UserStore::seeded()))
                .configure(configure(AppConfig::default())),
        )
        .await;

        for uri in ["/", "/api", "/api/userz", "/api/users/1/extra"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{}", uri);

            let body: serde_json::Value = test::read_body_json(resp).await;
            assert_eq!(body["success"], false);
            assert_eq!(body["message"], "Route not found");
        }
    }

    #[actix_web::test]
    async fn test_health_only_allows_get() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(UserStore::seeded()))
                .configure(configure(AppConfig::default())),
        )
        .await;

        let req = test::TestRequest::post().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Method not allowed");

        let req = test::TestRequest::default()
            .method(actix_web::http::Method::HEAD)
            .uri("/health")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }
}

use actix_web::{http::StatusCode, web, HttpResponse, ResponseError};

use crate::{
    api::response::{ApiResponse, MessageResponse},
    models::{CreateUserRequest, User},
    services::user_service,
    store::UserStore,
};

#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users in insertion order", body = ApiResponse<Vec<User>>)
    )
)]
pub async fn list_users(store: web::Data<UserStore>) -> HttpResponse {
    let users = user_service::list_users(&store);
    log::info!("👥 GET /api/users - {} users", users.len());

    ApiResponse::ok(users).into_response(StatusCode::OK)
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "Users",
    params(
        ("id" = u64, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "User found", body = ApiResponse<User>),
        (status = 404, description = "User not found", body = MessageResponse)
    )
)]
pub async fn get_user(store: web::Data<UserStore>, path: web::Path<u64>) -> HttpResponse {
    let id = path.into_inner();

    match user_service::get_user(&store, id) {
        Ok(user) => {
            log::info!("✅ GET /api/users/{} - found", id);
            ApiResponse::ok(user).into_response(StatusCode::OK)
        }
        Err(e) => {
            log::warn!("⚠️ GET /api/users/{} - {}", id, e);
            e.error_response()
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = ApiResponse<User>),
        (status = 400, description = "Malformed JSON body", body = MessageResponse)
    )
)]
pub async fn create_user(
    store: web::Data<UserStore>,
    request: web::Json<CreateUserRequest>,
) -> HttpResponse {
    let user = user_service::create_user(&store, request.into_inner());
    log::info!("📝 POST /api/users - created id {}", user.id);

    ApiResponse::ok(user).into_response(StatusCode::CREATED)
}

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Users Service API",
        version = "1.0.0",
        description = "In-memory users API.\n\n**Envelope:** every response carries `success`, plus `data` or `message`.\n\n**Features:**\n- Health checks at `/health` and `/api/health`\n- List, fetch and create users"
    ),
    paths(
        // Health
        crate::api::health::health_check,
        crate::api::health::api_health_check,

        // Users
        crate::api::users::list_users,
        crate::api::users::get_user,
        crate::api::users::create_user,
    ),
    components(
        schemas(
            crate::models::User,
            crate::models::CreateUserRequest,
            crate::api::response::MessageResponse,
        )
    ),
    tags(
        (name = "Health", description = "Liveness endpoints."),
        (name = "Users", description = "In-memory user records. Ids are assigned by the server."),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for expected in ["/health", "/api/health", "/api/users", "/api/users/{id}"] {
            assert!(paths.iter().any(|p| p.as_str() == expected), "missing {}", expected);
        }
    }
}

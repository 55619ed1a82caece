use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::user::list_users,
        api::user::create_user,
        api::user::get_user,
        api::user::update_user,
        // Add other endpoints here as we document them
    ),
    tags(
        (name = "knowledge-service", description = "Knowledge Service API")
    )
)]
pub struct ApiDoc;

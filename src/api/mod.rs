pub mod domain;
pub mod health;
pub mod organisation;
pub mod user;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::json;

use crate::domain::DomainError;
use crate::infrastructure::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Users
        .route("/users", get(user::list_users).post(user::create_user))
        .route("/users/:id", get(user::get_user).put(user::update_user))
        // Organisations
        .route(
            "/organisations",
            get(organisation::list_organisations).post(organisation::create_organisation),
        )
        .route(
            "/organisations/:id",
            get(organisation::get_organisation).put(organisation::update_organisation),
        )
        // Domains
        .route("/domains", get(domain::list_domains).post(domain::create_domain))
        .route("/domains/:id", get(domain::get_domain).put(domain::update_domain))
        .with_state(state)
}

/// Map a domain failure to its stable external error code.
///
/// Conflict and Unavailable details may carry storage-level text, so the
/// external message is generic; the detail is logged here instead.
pub(crate) fn error_response(err: DomainError) -> Response {
    let (status, code, message) = match &err {
        DomainError::Validation(msg) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            "validation_error",
            msg.clone(),
        ),
        DomainError::NotFound => (
            StatusCode::NOT_FOUND,
            "not_found",
            "Resource not found".to_string(),
        ),
        DomainError::Conflict(_) => (
            StatusCode::CONFLICT,
            "conflict",
            "An entity with the same identity already exists".to_string(),
        ),
        DomainError::Unavailable(_) => (
            StatusCode::SERVICE_UNAVAILABLE,
            "unavailable",
            "Storage backend unavailable".to_string(),
        ),
    };

    match &err {
        DomainError::Unavailable(detail) => tracing::error!("storage failure: {}", detail),
        DomainError::Conflict(detail) => tracing::debug!("conflict: {}", detail),
        _ => {}
    }

    (status, Json(json!({"error": code, "message": message}))).into_response()
}

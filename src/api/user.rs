//! User API handlers
//!
//! Shape coercion only: payloads are mapped onto use case inputs and
//! results onto JSON responses. Semantic validation lives in the use cases.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Deserializer};
use serde_json::json;

/// Deserialize a nested `Option<Option<T>>` so that an absent field stays
/// `None` while an explicit JSON `null` becomes `Some(None)`. Without this,
/// serde collapses both cases to `None` and `null` can never clear a field.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Ok(Some(Option::deserialize(deserializer)?))
}

use crate::domain::{CreateUserInput, UpdateUserInput, UserFilter};
use crate::infrastructure::AppState;
use crate::usecases::{CreateUser, GetUser, ListUsers, UpdateUser};

use super::error_response;

#[derive(Debug, Deserialize)]
pub struct ListUsersQuery {
    pub organisation_id: Option<i32>,
}

#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "List users, optionally filtered by organisation")
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<ListUsersQuery>,
) -> impl IntoResponse {
    let filter = UserFilter {
        organisation_id: query.organisation_id,
    };

    match ListUsers::new(state.user_repo.clone()).execute(filter).await {
        Ok(users) => {
            let total = users.len();
            Json(json!({
                "users": users,
                "total": total
            }))
            .into_response()
        }
        Err(e) => error_response(e),
    }
}

/// Request DTO for creating a user
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub organisation_id: Option<i32>,
}

#[utoipa::path(
    post,
    path = "/api/users",
    responses(
        (status = 201, description = "User created"),
        (status = 404, description = "Referenced organisation does not exist"),
        (status = 409, description = "Username already taken"),
        (status = 422, description = "Missing required fields")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> impl IntoResponse {
    let input = CreateUserInput {
        username: payload.username,
        email: payload.email,
        organisation_id: payload.organisation_id,
    };

    let usecase = CreateUser::new(state.user_repo.clone(), state.organisation_repo.clone());

    match usecase.execute(input).await {
        Ok(user) => (StatusCode::CREATED, Json(json!({ "user": user }))).into_response(),
        Err(e) => error_response(e),
    }
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "User found"),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(State(state): State<AppState>, Path(id): Path<i32>) -> impl IntoResponse {
    match GetUser::new(state.user_repo.clone()).execute(id).await {
        Ok(user) => Json(json!({ "user": user })).into_response(),
        Err(e) => error_response(e),
    }
}

/// Request DTO for partial user updates. A field that is absent is left
/// untouched; `organisation_id: null` clears the membership.
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub organisation_id: Option<Option<i32>>,
}

#[utoipa::path(
    put,
    path = "/api/users/{id}",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "User updated"),
        (status = 404, description = "User not found"),
        (status = 422, description = "Invalid field values")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateUserRequest>,
) -> impl IntoResponse {
    let changes = UpdateUserInput {
        username: payload.username,
        email: payload.email,
        organisation_id: payload.organisation_id,
    };

    let usecase = UpdateUser::new(state.user_repo.clone(), state.organisation_repo.clone());

    match usecase.execute(id, changes).await {
        Ok(user) => Json(json!({ "user": user })).into_response(),
        Err(e) => error_response(e),
    }
}

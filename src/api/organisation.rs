//! Organisation API handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;

use crate::domain::{CreateOrganisationInput, UpdateOrganisationInput};
use crate::infrastructure::AppState;
use crate::usecases::{CreateOrganisation, GetOrganisation, ListOrganisations, UpdateOrganisation};

use super::error_response;

pub async fn list_organisations(State(state): State<AppState>) -> impl IntoResponse {
    match ListOrganisations::new(state.organisation_repo.clone())
        .execute()
        .await
    {
        Ok(organisations) => {
            let total = organisations.len();
            Json(json!({
                "organisations": organisations,
                "total": total
            }))
            .into_response()
        }
        Err(e) => error_response(e),
    }
}

/// Request DTO for creating an organisation
#[derive(Debug, Deserialize)]
pub struct CreateOrganisationRequest {
    pub name: String,
    pub description: Option<String>,
}

pub async fn create_organisation(
    State(state): State<AppState>,
    Json(payload): Json<CreateOrganisationRequest>,
) -> impl IntoResponse {
    let input = CreateOrganisationInput {
        name: payload.name,
        description: payload.description,
    };

    match CreateOrganisation::new(state.organisation_repo.clone())
        .execute(input)
        .await
    {
        Ok(organisation) => (
            StatusCode::CREATED,
            Json(json!({ "organisation": organisation })),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn get_organisation(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    match GetOrganisation::new(state.organisation_repo.clone())
        .execute(id)
        .await
    {
        Ok(organisation) => Json(json!({ "organisation": organisation })).into_response(),
        Err(e) => error_response(e),
    }
}

/// Request DTO for partial organisation updates
#[derive(Debug, Deserialize)]
pub struct UpdateOrganisationRequest {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
}

pub async fn update_organisation(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateOrganisationRequest>,
) -> impl IntoResponse {
    let changes = UpdateOrganisationInput {
        name: payload.name,
        description: payload.description,
    };

    match UpdateOrganisation::new(state.organisation_repo.clone())
        .execute(id, changes)
        .await
    {
        Ok(organisation) => Json(json!({ "organisation": organisation })).into_response(),
        Err(e) => error_response(e),
    }
}

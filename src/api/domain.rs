//! Domain API handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;

use crate::domain::{CreateDomainInput, DomainFilter, UpdateDomainInput};
use crate::infrastructure::AppState;
use crate::usecases::{CreateDomain, GetDomain, ListDomains, UpdateDomain};

use super::error_response;

#[derive(Debug, Deserialize)]
pub struct ListDomainsQuery {
    pub organisation_id: Option<i32>,
}

pub async fn list_domains(
    State(state): State<AppState>,
    Query(query): Query<ListDomainsQuery>,
) -> impl IntoResponse {
    let filter = DomainFilter {
        organisation_id: query.organisation_id,
    };

    match ListDomains::new(state.domain_repo.clone()).execute(filter).await {
        Ok(domains) => {
            let total = domains.len();
            Json(json!({
                "domains": domains,
                "total": total
            }))
            .into_response()
        }
        Err(e) => error_response(e),
    }
}

/// Request DTO for creating a domain
#[derive(Debug, Deserialize)]
pub struct CreateDomainRequest {
    pub name: String,
    pub description: Option<String>,
    pub organisation_id: i32,
}

pub async fn create_domain(
    State(state): State<AppState>,
    Json(payload): Json<CreateDomainRequest>,
) -> impl IntoResponse {
    let input = CreateDomainInput {
        name: payload.name,
        description: payload.description,
        organisation_id: payload.organisation_id,
    };

    let usecase = CreateDomain::new(state.domain_repo.clone(), state.organisation_repo.clone());

    match usecase.execute(input).await {
        Ok(domain) => (StatusCode::CREATED, Json(json!({ "domain": domain }))).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn get_domain(State(state): State<AppState>, Path(id): Path<i32>) -> impl IntoResponse {
    match GetDomain::new(state.domain_repo.clone()).execute(id).await {
        Ok(domain) => Json(json!({ "domain": domain })).into_response(),
        Err(e) => error_response(e),
    }
}

/// Request DTO for partial domain updates
#[derive(Debug, Deserialize)]
pub struct UpdateDomainRequest {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
}

pub async fn update_domain(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateDomainRequest>,
) -> impl IntoResponse {
    let changes = UpdateDomainInput {
        name: payload.name,
        description: payload.description,
    };

    match UpdateDomain::new(state.domain_repo.clone())
        .execute(id, changes)
        .await
    {
        Ok(domain) => Json(json!({ "domain": domain })).into_response(),
        Err(e) => error_response(e),
    }
}

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        opportunity::{NewOpportunityDto, OpportunityDto, OpportunityPatchDto},
    },
    server::{
        error::Error,
        model::{app::AppState, auth::AuthUser},
        service::opportunity::OpportunityService,
    },
};

pub static OPPORTUNITY_TAG: &str = "opportunity";

/// List published opportunities, newest first
#[utoipa::path(
    get,
    path = "/api/opportunities",
    tag = OPPORTUNITY_TAG,
    responses(
        (status = 200, description = "Opportunities on offer", body = Vec<OpportunityDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    )
)]
pub async fn list_opportunities(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let opportunity_service = OpportunityService::new(&state.db);

    let opportunities = opportunity_service.list().await?;

    Ok(Json(opportunities))
}

/// Publish a new opportunity
#[utoipa::path(
    post,
    path = "/api/opportunities",
    tag = OPPORTUNITY_TAG,
    request_body = NewOpportunityDto,
    responses(
        (status = 201, description = "Opportunity published", body = OpportunityDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 422, description = "Missing or invalid fields", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn create_opportunity(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<NewOpportunityDto>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    let opportunity_service = OpportunityService::new(&state.db);

    let created = opportunity_service.create(body).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// Update fields of an existing opportunity
#[utoipa::path(
    put,
    path = "/api/opportunities/{id}",
    tag = OPPORTUNITY_TAG,
    params(("id" = i32, Path, description = "Opportunity ID")),
    request_body = OpportunityPatchDto,
    responses(
        (status = 200, description = "Opportunity updated", body = OpportunityDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Opportunity not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn update_opportunity(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i32>,
    Json(body): Json<OpportunityPatchDto>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    let opportunity_service = OpportunityService::new(&state.db);

    let updated = opportunity_service.update(id, body).await?;

    Ok(Json(updated))
}

/// Delete an opportunity and its applications
#[utoipa::path(
    delete,
    path = "/api/opportunities/{id}",
    tag = OPPORTUNITY_TAG,
    params(("id" = i32, Path, description = "Opportunity ID")),
    responses(
        (status = 200, description = "Opportunity deleted", body = MessageDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Opportunity not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = []))
)]
pub async fn delete_opportunity(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    auth.require_admin()?;

    let opportunity_service = OpportunityService::new(&state.db);

    opportunity_service.delete(id).await?;

    Ok(Json(MessageDto {
        message: "Oferta eliminada".to_string(),
    }))
}

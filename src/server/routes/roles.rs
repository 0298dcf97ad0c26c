//! Role management endpoints

use super::actor_id;
use crate::core::models::PermissionMatrix;
use crate::core::roles::{CreateRole, DuplicateRole, UpdateRole};
use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::{HttpRequest, HttpResponse, web};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Permission summary request payload
#[derive(Debug, Deserialize)]
pub struct SummaryRequest {
    /// Permission matrix to summarize, keyed by module key
    #[serde(default)]
    pub permissions: PermissionMatrix,
}

/// Permission summary response
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    /// Human-readable capability summary
    pub summary: String,
}

/// List all roles with embedded permission matrices
/// GET /api/v1/roles
pub async fn list_roles(data: web::Data<AppState>) -> Result<HttpResponse> {
    let roles = data.roles.list_roles().await?;
    Ok(HttpResponse::Ok().json(roles))
}

/// Create a custom role
/// POST /api/v1/roles
pub async fn create_role(
    req: HttpRequest,
    data: web::Data<AppState>,
    payload: web::Json<CreateRole>,
) -> Result<HttpResponse> {
    let actor = actor_id(&req)?;
    let role = data.roles.create_role(actor, payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(role))
}

/// Update a custom role
/// PUT /api/v1/roles/{role_id}
pub async fn update_role(
    req: HttpRequest,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<UpdateRole>,
) -> Result<HttpResponse> {
    let actor = actor_id(&req)?;
    let role = data
        .roles
        .update_role(actor, path.into_inner(), payload.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(role))
}

/// Delete a custom role with no referencing members
/// DELETE /api/v1/roles/{role_id}
pub async fn delete_role(
    req: HttpRequest,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let actor = actor_id(&req)?;
    data.roles.delete_role(actor, path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Duplicate a role under a new name
/// POST /api/v1/roles/{role_id}/duplicate
pub async fn duplicate_role(
    req: HttpRequest,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<DuplicateRole>,
) -> Result<HttpResponse> {
    let actor = actor_id(&req)?;
    let role = data
        .roles
        .duplicate_role(actor, path.into_inner(), payload.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(role))
}

/// Render the capability summary for a permission matrix
/// POST /api/v1/permissions/summary
pub async fn permission_summary(
    data: web::Data<AppState>,
    payload: web::Json<SummaryRequest>,
) -> Result<HttpResponse> {
    let summary = data.roles.permission_summary(&payload.permissions).await?;
    Ok(HttpResponse::Ok().json(SummaryResponse { summary }))
}

//! Member management endpoints

use super::actor_id;
use crate::core::members::InviteMember;
use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::{HttpRequest, HttpResponse, web};
use serde::Deserialize;
use uuid::Uuid;

/// Role reassignment request payload
#[derive(Debug, Deserialize)]
pub struct UpdateMemberRole {
    /// Role to assign
    pub role_id: Uuid,
}

/// List all members with embedded roles
/// GET /api/v1/members
pub async fn list_members(data: web::Data<AppState>) -> Result<HttpResponse> {
    let members = data.members.list_members().await?;
    Ok(HttpResponse::Ok().json(members))
}

/// Invite a member to the team
/// POST /api/v1/members
pub async fn invite_member(
    req: HttpRequest,
    data: web::Data<AppState>,
    payload: web::Json<InviteMember>,
) -> Result<HttpResponse> {
    let actor = actor_id(&req)?;
    let member = data
        .members
        .invite_member(actor, payload.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(member))
}

/// Reassign a member's role
/// PUT /api/v1/members/{member_id}/role
pub async fn update_member_role(
    req: HttpRequest,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<UpdateMemberRole>,
) -> Result<HttpResponse> {
    let actor = actor_id(&req)?;
    let member = data
        .members
        .update_member_role(actor, path.into_inner(), payload.role_id)
        .await?;
    Ok(HttpResponse::Ok().json(member))
}

/// Remove a member from the team
/// DELETE /api/v1/members/{member_id}
pub async fn remove_member(
    req: HttpRequest,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let actor = actor_id(&req)?;
    data.members
        .remove_member(actor, path.into_inner())
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Refresh a pending member's invite timestamp
/// POST /api/v1/members/{member_id}/resend-invite
pub async fn resend_invite(
    req: HttpRequest,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let actor = actor_id(&req)?;
    let member = data
        .members
        .resend_invite(actor, path.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(member))
}

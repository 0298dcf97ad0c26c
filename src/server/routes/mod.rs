//! HTTP routes

mod health;
mod members;
mod modules;
mod roles;

use crate::utils::error::{AccessError, Result};
use actix_web::{HttpRequest, web};
use uuid::Uuid;

/// Wire all routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health));
    cfg.service(
        web::scope("/api/v1")
            .route("/modules", web::get().to(modules::list_modules))
            .route("/modules/{key}", web::get().to(modules::get_module))
            .route("/roles", web::get().to(roles::list_roles))
            .route("/roles", web::post().to(roles::create_role))
            .route("/roles/{role_id}", web::put().to(roles::update_role))
            .route("/roles/{role_id}", web::delete().to(roles::delete_role))
            .route(
                "/roles/{role_id}/duplicate",
                web::post().to(roles::duplicate_role),
            )
            .route("/members", web::get().to(members::list_members))
            .route("/members", web::post().to(members::invite_member))
            .route(
                "/members/{member_id}/role",
                web::put().to(members::update_member_role),
            )
            .route(
                "/members/{member_id}",
                web::delete().to(members::remove_member),
            )
            .route(
                "/members/{member_id}/resend-invite",
                web::post().to(members::resend_invite),
            )
            .route(
                "/permissions/summary",
                web::post().to(roles::permission_summary),
            ),
    );
}

/// Caller identity from the identity-resolution boundary
///
/// Authentication is out of scope for the engine; upstream infrastructure
/// injects the verified caller's user id in the `X-Actor-Id` header.
pub(crate) fn actor_id(req: &HttpRequest) -> Result<Uuid> {
    let header = req
        .headers()
        .get("X-Actor-Id")
        .ok_or_else(|| AccessError::validation("Missing X-Actor-Id header"))?;

    let value = header
        .to_str()
        .map_err(|_| AccessError::validation("Invalid X-Actor-Id header"))?;

    Uuid::parse_str(value).map_err(|_| AccessError::validation("X-Actor-Id must be a UUID"))
}

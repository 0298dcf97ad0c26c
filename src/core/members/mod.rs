//! Membership manager


use crate::config::AccessConfig;
use crate::core::access::{ActorContext, PrivilegeGuard};
use crate::core::models::{Member, MemberStatus};
use crate::storage::database::member_ops::{self, NewMember};
use crate::storage::database::{SeaOrmDatabase, role_ops};
use crate::utils::error::{AccessError, Result};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Request to invite a member
#[derive(Debug, Clone, Deserialize)]
pub struct InviteMember {
    /// Email address of the invitee
    pub email: String,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Role to assign
    pub role_id: Uuid,
}

/// Membership manager
///
/// Owns the member lifecycle and delegates every privilege decision to the
/// guard. Mail dispatch is external; the engine only records `invited_at`.
pub struct MemberService {
    database: Arc<SeaOrmDatabase>,
    access: AccessConfig,
}

impl MemberService {
    /// Create a new member service
    pub fn new(database: Arc<SeaOrmDatabase>, access: AccessConfig) -> Self {
        Self { database, access }
    }

    /// List all members with their embedded roles
    pub async fn list_members(&self) -> Result<Vec<Member>> {
        member_ops::list_members(self.database.connection()).await
    }

    /// Invite a member to the team
    ///
    /// The invite escalation check is skipped entirely while the system is in
    /// bootstrap state, so the very first actor may assign any role,
    /// including the highest.
    pub async fn invite_member(&self, actor_id: Uuid, request: InviteMember) -> Result<Member> {
        let email = normalize_email(&request.email);
        if email.is_empty() || !email.contains('@') {
            return Err(AccessError::validation("A valid email address is required"));
        }

        info!("Inviting member: {}", email);

        let txn = self.database.begin().await?;
        let ctx = ActorContext::resolve(&txn, actor_id).await?;
        let guard = PrivilegeGuard::new(&self.access);

        if !guard.can_invite_users(&ctx) {
            return Err(AccessError::escalation(
                "Actor is not allowed to invite members",
            ));
        }

        let role = role_ops::find_role(&txn, request.role_id)
            .await?
            .ok_or_else(|| AccessError::not_found("Role not found"))?;

        if !ctx.is_bootstrap && !guard.can_assign_role(&ctx, role.privilege_level) {
            return Err(AccessError::escalation(format!(
                "Cannot assign a role more powerful than your own: {}",
                role.name
            )));
        }

        if member_ops::find_member_by_email(&txn, &email)
            .await?
            .is_some()
        {
            return Err(AccessError::DuplicateEmail);
        }

        let member = member_ops::insert_member(
            &txn,
            NewMember {
                email,
                name: clean_name(request.name),
                role_id: role.id,
                invited_by: Some(actor_id),
            },
        )
        .await?;

        txn.commit().await?;
        info!("Member invited successfully: {}", member.id);
        Ok(member)
    }

    /// Reassign a member's role
    ///
    /// Unlike the invite flow there is no bootstrap bypass here: once any
    /// member exists the system is no longer bootstrapping.
    pub async fn update_member_role(
        &self,
        actor_id: Uuid,
        member_id: Uuid,
        role_id: Uuid,
    ) -> Result<Member> {
        info!("Updating role for member: {}", member_id);

        let txn = self.database.begin().await?;
        let ctx = ActorContext::resolve(&txn, actor_id).await?;
        let guard = PrivilegeGuard::new(&self.access);

        if !guard.can_manage_roles(&ctx) {
            return Err(AccessError::escalation(
                "Actor is not allowed to manage members",
            ));
        }

        let model = member_ops::find_member_row(&txn, member_id)
            .await?
            .ok_or_else(|| AccessError::not_found("Member not found"))?;

        let role = role_ops::find_role(&txn, role_id)
            .await?
            .ok_or_else(|| AccessError::not_found("Role not found"))?;

        if !guard.can_assign_role(&ctx, role.privilege_level) {
            return Err(AccessError::escalation(format!(
                "Cannot assign a role more powerful than your own: {}",
                role.name
            )));
        }

        let member = member_ops::update_member_role_row(&txn, model, role.id).await?;
        txn.commit().await?;

        Ok(member)
    }

    /// Remove a member from the team
    pub async fn remove_member(&self, actor_id: Uuid, member_id: Uuid) -> Result<()> {
        info!("Removing member: {}", member_id);

        let txn = self.database.begin().await?;
        let ctx = ActorContext::resolve(&txn, actor_id).await?;
        let guard = PrivilegeGuard::new(&self.access);

        if !guard.can_manage_roles(&ctx) {
            return Err(AccessError::escalation(
                "Actor is not allowed to manage members",
            ));
        }

        let model = member_ops::find_member_row(&txn, member_id)
            .await?
            .ok_or_else(|| AccessError::not_found("Member not found"))?;

        // Identity continuity guard, enforced in every authorization mode
        if model.user_id == Some(actor_id) {
            return Err(AccessError::SelfRemoval);
        }

        member_ops::delete_member_row(&txn, member_id).await?;
        txn.commit().await?;

        info!("Member removed successfully: {}", member_id);
        Ok(())
    }

    /// Refresh a pending member's invite timestamp
    ///
    /// Idempotent: an already-active member is returned unchanged.
    pub async fn resend_invite(&self, actor_id: Uuid, member_id: Uuid) -> Result<Member> {
        info!("Resending invite for member: {}", member_id);

        let txn = self.database.begin().await?;
        let ctx = ActorContext::resolve(&txn, actor_id).await?;
        let guard = PrivilegeGuard::new(&self.access);

        if !guard.can_invite_users(&ctx) {
            return Err(AccessError::escalation(
                "Actor is not allowed to invite members",
            ));
        }

        let model = member_ops::find_member_row(&txn, member_id)
            .await?
            .ok_or_else(|| AccessError::not_found("Member not found"))?;

        let member = if model.status == MemberStatus::Pending.as_str() {
            member_ops::touch_invited_at(&txn, model).await?
        } else {
            member_ops::find_member(&txn, member_id)
                .await?
                .ok_or_else(|| AccessError::internal("Member missing during resend"))?
        };

        txn.commit().await?;
        Ok(member)
    }
}

/// Normalize an email for storage and comparison
///
/// Uniqueness is case-insensitive; storing the normalized form lets the
/// store's unique index enforce it as a second line of defense.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

fn clean_name(name: Option<String>) -> Option<String> {
    name.map(|n| n.trim().to_string()).filter(|n| !n.is_empty())
}

//! Actor context resolution

use crate::core::models::Role;
use crate::storage::database::member_ops;
use crate::utils::error::Result;
use sea_orm::ConnectionTrait;
use uuid::Uuid;

/// Resolved caller context for a privileged operation
///
/// Derived, never persisted. Resolved by a fresh read at the start of every
/// privileged operation so the bootstrap state can never go stale.
#[derive(Debug, Clone)]
pub struct ActorContext {
    /// The caller's user account
    pub user_id: Uuid,
    /// The caller's role, if the caller is an active member of the team
    pub role: Option<Role>,
    /// True iff no member records exist yet, regardless of status
    pub is_bootstrap: bool,
}

impl ActorContext {
    /// Resolve the caller's membership and the bootstrap state
    pub async fn resolve<C: ConnectionTrait>(conn: &C, user_id: Uuid) -> Result<Self> {
        let total_members = member_ops::count_members(conn).await?;
        let role = member_ops::find_member_by_user(conn, user_id)
            .await?
            .map(|member| member.role);

        Ok(Self {
            user_id,
            role,
            is_bootstrap: total_members == 0,
        })
    }

    /// The caller's privilege level, if they have a resolved role
    pub fn privilege_level(&self) -> Option<i32> {
        self.role.as_ref().map(|role| role.privilege_level)
    }
}

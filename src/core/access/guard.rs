//! Privilege decision functions

use super::context::ActorContext;
use crate::config::{AccessConfig, AuthorizationMode};
use crate::core::models::PermissionLevel;

/// Pure privilege checks over a resolved actor context
///
/// Thresholds come from [`AccessConfig`]; nothing here persists or logs, so
/// every decision is unit-testable in isolation.
#[derive(Debug, Clone, Copy)]
pub struct PrivilegeGuard<'a> {
    config: &'a AccessConfig,
}

impl<'a> PrivilegeGuard<'a> {
    /// Create a guard over the given policy configuration
    pub fn new(config: &'a AccessConfig) -> Self {
        Self { config }
    }

    /// Whether the actor may attach a role of the given privilege to a member
    ///
    /// An actor may grant a role no more powerful than their own, including
    /// their own exact level.
    pub fn can_assign_role(&self, actor: &ActorContext, target_privilege: i32) -> bool {
        if self.config.mode == AuthorizationMode::AllowAll {
            return true;
        }

        match actor.privilege_level() {
            Some(actor_privilege) => target_privilege <= actor_privilege,
            None => false,
        }
    }

    /// Whether the actor may create, modify, or delete roles
    pub fn can_manage_roles(&self, actor: &ActorContext) -> bool {
        if self.config.mode == AuthorizationMode::AllowAll {
            return true;
        }

        if actor.is_bootstrap {
            return true;
        }

        let Some(role) = actor.role.as_ref() else {
            return false;
        };

        role.privilege_level >= self.config.role_management_threshold
            || role.level_for(&self.config.user_management_module) == PermissionLevel::Admin
    }

    /// Whether the actor may invite members to the team
    pub fn can_invite_users(&self, actor: &ActorContext) -> bool {
        if self.can_manage_roles(actor) {
            return true;
        }

        actor
            .privilege_level()
            .is_some_and(|privilege| privilege >= self.config.invite_threshold)
    }

    /// Privilege level assigned to a role the actor creates
    ///
    /// Computed, never caller-supplied: one below the actor's own level,
    /// clamped into `[1, custom_role_cap]`. A created role is therefore
    /// always strictly weaker than its creator. A bootstrap actor with no
    /// role of their own creates at the cap.
    pub fn creation_privilege(&self, actor: &ActorContext) -> i32 {
        let actor_privilege = actor
            .privilege_level()
            .unwrap_or(self.config.role_management_threshold);

        (actor_privilege - 1).clamp(1, self.config.custom_role_cap)
    }
}

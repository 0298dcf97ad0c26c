//! Tests for privilege decision functions

use super::{ActorContext, PrivilegeGuard};
use crate::config::{AccessConfig, AuthorizationMode};
use crate::core::models::{PermissionLevel, PermissionMatrix, Role};
use chrono::Utc;
use uuid::Uuid;

fn role_with(privilege_level: i32, permissions: PermissionMatrix) -> Role {
    Role {
        id: Uuid::new_v4(),
        name: "Test Role".to_string(),
        description: None,
        is_system_role: false,
        privilege_level,
        created_by: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
        permissions,
    }
}

fn actor(privilege_level: Option<i32>, is_bootstrap: bool) -> ActorContext {
    ActorContext {
        user_id: Uuid::new_v4(),
        role: privilege_level.map(|level| role_with(level, PermissionMatrix::new())),
        is_bootstrap,
    }
}

#[test]
fn test_assign_allows_own_level_and_below() {
    let config = AccessConfig::default();
    let guard = PrivilegeGuard::new(&config);
    let actor = actor(Some(80), false);

    assert!(guard.can_assign_role(&actor, 80));
    assert!(guard.can_assign_role(&actor, 10));
    assert!(!guard.can_assign_role(&actor, 81));
    assert!(!guard.can_assign_role(&actor, 100));
}

#[test]
fn test_assign_requires_a_resolved_role() {
    let config = AccessConfig::default();
    let guard = PrivilegeGuard::new(&config);
    let actor = actor(None, false);

    assert!(!guard.can_assign_role(&actor, 1));
}

#[test]
fn test_manage_roles_at_threshold() {
    let config = AccessConfig::default();
    let guard = PrivilegeGuard::new(&config);

    assert!(guard.can_manage_roles(&actor(Some(100), false)));
    assert!(!guard.can_manage_roles(&actor(Some(99), false)));
    assert!(!guard.can_manage_roles(&actor(None, false)));
}

#[test]
fn test_manage_roles_via_user_management_admin() {
    let config = AccessConfig::default();
    let guard = PrivilegeGuard::new(&config);

    let mut permissions = PermissionMatrix::new();
    permissions.insert("user_management".to_string(), PermissionLevel::Admin);
    let ctx = ActorContext {
        user_id: Uuid::new_v4(),
        role: Some(role_with(20, permissions)),
        is_bootstrap: false,
    };

    assert!(guard.can_manage_roles(&ctx));

    // Any lesser level on the module is not enough
    let mut permissions = PermissionMatrix::new();
    permissions.insert("user_management".to_string(), PermissionLevel::Approve);
    let ctx = ActorContext {
        user_id: Uuid::new_v4(),
        role: Some(role_with(20, permissions)),
        is_bootstrap: false,
    };

    assert!(!guard.can_manage_roles(&ctx));
}

#[test]
fn test_bootstrap_grants_management_and_invites() {
    let config = AccessConfig::default();
    let guard = PrivilegeGuard::new(&config);
    let ctx = actor(None, true);

    assert!(guard.can_manage_roles(&ctx));
    assert!(guard.can_invite_users(&ctx));
}

#[test]
fn test_invite_threshold() {
    let config = AccessConfig::default();
    let guard = PrivilegeGuard::new(&config);

    assert!(guard.can_invite_users(&actor(Some(80), false)));
    assert!(!guard.can_invite_users(&actor(Some(79), false)));
    assert!(!guard.can_invite_users(&actor(None, false)));
}

#[test]
fn test_allow_all_mode_short_circuits() {
    let config = AccessConfig {
        mode: AuthorizationMode::AllowAll,
        ..Default::default()
    };
    let guard = PrivilegeGuard::new(&config);
    let ctx = actor(None, false);

    assert!(guard.can_assign_role(&ctx, 100));
    assert!(guard.can_manage_roles(&ctx));
    assert!(guard.can_invite_users(&ctx));
}

#[test]
fn test_creation_privilege_is_capped_and_floored() {
    let config = AccessConfig::default();
    let guard = PrivilegeGuard::new(&config);

    // One below the actor, capped at the custom ceiling
    assert_eq!(guard.creation_privilege(&actor(Some(100), false)), 50);
    assert_eq!(guard.creation_privilege(&actor(Some(51), false)), 50);
    assert_eq!(guard.creation_privilege(&actor(Some(40), false)), 39);
    // Floored at 1
    assert_eq!(guard.creation_privilege(&actor(Some(1), false)), 1);
    // A bootstrap actor with no role creates at the cap
    assert_eq!(guard.creation_privilege(&actor(None, true)), 50);
}

#[test]
fn test_creation_privilege_honors_configured_cap() {
    let config = AccessConfig {
        custom_role_cap: 30,
        ..Default::default()
    };
    let guard = PrivilegeGuard::new(&config);

    assert_eq!(guard.creation_privilege(&actor(Some(100), false)), 30);
    assert_eq!(guard.creation_privilege(&actor(Some(20), false)), 19);
}

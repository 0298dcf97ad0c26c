//! End-to-end lifecycle scenarios for the authorization engine

mod common;

use common::{add_active_member, empty_engine, empty_engine_with, role_named, team_with_owner};
use teamgate::config::{AccessConfig, AuthorizationMode};
use teamgate::core::members::InviteMember;
use teamgate::core::roles::{CreateRole, DuplicateRole, UpdateRole};
use teamgate::{AccessError, MemberStatus, PermissionLevel, PermissionMatrix};
use uuid::Uuid;

fn matrix(entries: &[(&str, PermissionLevel)]) -> PermissionMatrix {
    entries
        .iter()
        .map(|(key, level)| (key.to_string(), *level))
        .collect()
}

#[tokio::test]
async fn bootstrap_allows_first_owner_invite() {
    let engine = empty_engine().await;
    let owner_role = role_named(&engine.roles, "Owner").await;

    // An empty team never locks itself out: the very first actor assigns
    // the highest-privilege role despite having no membership.
    let member = engine
        .members
        .invite_member(
            Uuid::new_v4(),
            InviteMember {
                email: "owner@co.com".to_string(),
                name: Some("Founding Owner".to_string()),
                role_id: owner_role.id,
            },
        )
        .await
        .unwrap();

    assert_eq!(member.status, MemberStatus::Pending);
    assert_eq!(member.role.privilege_level, 100);
}

#[tokio::test]
async fn lower_privilege_actor_cannot_grant_higher_role() {
    let team = team_with_owner().await;
    let manager_role = role_named(&team.roles, "Manager").await;
    let owner_role = role_named(&team.roles, "Owner").await;
    let (manager_user, _) = add_active_member(&team, "manager@co.com", manager_role.id).await;

    let result = team
        .members
        .invite_member(
            manager_user,
            InviteMember {
                email: "newcomer@co.com".to_string(),
                name: None,
                role_id: owner_role.id,
            },
        )
        .await;

    assert!(matches!(result, Err(AccessError::PrivilegeEscalation(_))));
}

#[tokio::test]
async fn role_deletion_blocked_until_members_reassigned() {
    let team = team_with_owner().await;

    let role = team
        .roles
        .create_role(
            team.owner_user,
            CreateRole {
                name: "Compliance Auditor".to_string(),
                description: None,
                permissions: matrix(&[("compliance", PermissionLevel::Approve)]),
            },
        )
        .await
        .unwrap();

    let (_, first) = add_active_member(&team, "auditor1@co.com", role.id).await;
    let (_, second) = add_active_member(&team, "auditor2@co.com", role.id).await;

    match team.roles.delete_role(team.owner_user, role.id).await {
        Err(AccessError::RoleInUse(count)) => assert_eq!(count, 2),
        other => panic!("Expected RoleInUse, got {:?}", other.map(|_| ())),
    }

    let viewer = role_named(&team.roles, "Viewer").await;
    team.members
        .update_member_role(team.owner_user, first.id, viewer.id)
        .await
        .unwrap();
    team.members
        .update_member_role(team.owner_user, second.id, viewer.id)
        .await
        .unwrap();

    team.roles
        .delete_role(team.owner_user, role.id)
        .await
        .unwrap();

    let remaining = team.roles.list_roles().await.unwrap();
    assert!(remaining.iter().all(|r| r.id != role.id));
}

#[tokio::test]
async fn duplicate_invite_differing_only_in_case_is_rejected() {
    let team = team_with_owner().await;
    let viewer = role_named(&team.roles, "Viewer").await;

    team.members
        .invite_member(
            team.owner_user,
            InviteMember {
                email: "jane@co.com".to_string(),
                name: None,
                role_id: viewer.id,
            },
        )
        .await
        .unwrap();

    let result = team
        .members
        .invite_member(
            team.owner_user,
            InviteMember {
                email: "Jane@Co.com".to_string(),
                name: None,
                role_id: viewer.id,
            },
        )
        .await;

    assert!(matches!(result, Err(AccessError::DuplicateEmail)));
}

#[tokio::test]
async fn sole_owner_cannot_remove_themselves() {
    let team = team_with_owner().await;

    let result = team
        .members
        .remove_member(team.owner_user, team.owner_member.id)
        .await;

    assert!(matches!(result, Err(AccessError::SelfRemoval)));

    // The membership is untouched
    assert_eq!(team.members.list_members().await.unwrap().len(), 1);
}

#[tokio::test]
async fn summary_renders_catalog_names_in_display_order() {
    let team = team_with_owner().await;

    let summary = team
        .roles
        .permission_summary(&matrix(&[
            ("payroll", PermissionLevel::Admin),
            ("contracts", PermissionLevel::Manage),
            ("compliance", PermissionLevel::View),
        ]))
        .await
        .unwrap();

    assert_eq!(summary, "Can manage Payroll, Contracts, view Compliance");
}

#[tokio::test]
async fn full_team_provisioning_flow() {
    let team = team_with_owner().await;

    // The catalog is seeded and ordered
    let modules = team.modules.list_modules().await.unwrap();
    assert_eq!(modules.len(), 6);
    assert_eq!(modules[0].key, "user_management");
    assert!(team.modules.get_module_by_key("payroll").await.is_ok());
    assert!(matches!(
        team.modules.get_module_by_key("unknown").await,
        Err(AccessError::NotFound(_))
    ));

    // Owner provisions a custom role
    let role = team
        .roles
        .create_role(
            team.owner_user,
            CreateRole {
                name: "Payroll Clerk".to_string(),
                description: Some("Runs the payroll cycle".to_string()),
                permissions: matrix(&[
                    ("payroll", PermissionLevel::Manage),
                    ("reports", PermissionLevel::View),
                ]),
            },
        )
        .await
        .unwrap();
    assert_eq!(role.privilege_level, 50);

    // A duplicate starts from the same matrix under a fresh name
    let copy = team
        .roles
        .duplicate_role(
            team.owner_user,
            role.id,
            DuplicateRole {
                name: "Payroll Clerk (Interim)".to_string(),
            },
        )
        .await
        .unwrap();
    assert_eq!(copy.permissions, role.permissions);
    assert_eq!(copy.description.as_deref(), Some("Copy of Payroll Clerk"));

    // Tightening the copy replaces its whole matrix
    let copy = team
        .roles
        .update_role(
            team.owner_user,
            copy.id,
            UpdateRole {
                name: "Payroll Viewer".to_string(),
                description: None,
                permissions: matrix(&[("payroll", PermissionLevel::View)]),
            },
        )
        .await
        .unwrap();
    assert_eq!(copy.level_for("payroll"), PermissionLevel::View);
    assert!(!copy.permissions.contains_key("reports"));

    // A member joins under the custom role and later leaves
    let (_, clerk) = add_active_member(&team, "clerk@co.com", role.id).await;
    let summary = team
        .roles
        .permission_summary(&clerk.role.permissions)
        .await
        .unwrap();
    assert_eq!(summary, "Can manage Payroll, view Reports");

    team.members
        .remove_member(team.owner_user, clerk.id)
        .await
        .unwrap();
    team.roles
        .delete_role(team.owner_user, role.id)
        .await
        .unwrap();
}

#[tokio::test]
async fn allow_all_mode_disables_privilege_checks_only() {
    let engine = empty_engine_with(AccessConfig {
        mode: AuthorizationMode::AllowAll,
        ..Default::default()
    })
    .await;

    let owner_role = role_named(&engine.roles, "Owner").await;

    // Seed one member so the system is out of bootstrap
    engine
        .members
        .invite_member(
            Uuid::new_v4(),
            InviteMember {
                email: "first@co.com".to_string(),
                name: None,
                role_id: owner_role.id,
            },
        )
        .await
        .unwrap();

    // A roleless actor passes every privilege check in allow-all mode
    let actor = Uuid::new_v4();
    engine
        .members
        .invite_member(
            actor,
            InviteMember {
                email: "second@co.com".to_string(),
                name: None,
                role_id: owner_role.id,
            },
        )
        .await
        .unwrap();

    engine
        .roles
        .create_role(
            actor,
            CreateRole {
                name: "Demo Role".to_string(),
                description: None,
                permissions: PermissionMatrix::new(),
            },
        )
        .await
        .unwrap();

    // Intrinsic invariants still hold
    let result = engine.roles.delete_role(actor, owner_role.id).await;
    assert!(matches!(result, Err(AccessError::SystemRoleImmutable)));

    let result = engine
        .members
        .invite_member(
            actor,
            InviteMember {
                email: "Second@Co.com".to_string(),
                name: None,
                role_id: owner_role.id,
            },
        )
        .await;
    assert!(matches!(result, Err(AccessError::DuplicateEmail)));
}

#[tokio::test]
async fn assignment_invariant_holds_for_successful_operations() {
    let team = team_with_owner().await;
    let admin_role = role_named(&team.roles, "Administrator").await;
    let (admin_user, _) = add_active_member(&team, "admin@co.com", admin_role.id).await;

    let viewer = role_named(&team.roles, "Viewer").await;
    let invited = team
        .members
        .invite_member(
            admin_user,
            InviteMember {
                email: "viewer@co.com".to_string(),
                name: None,
                role_id: viewer.id,
            },
        )
        .await
        .unwrap();

    // Outside bootstrap, every granted role is dominated by the actor's own
    assert!(invited.role.privilege_level <= admin_role.privilege_level);
}

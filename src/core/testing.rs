//! Shared fixtures for engine tests
//!
//! All fixtures run against a migrated in-memory SQLite database, so tests
//! exercise the real storage path including the seeded system data.

use crate::config::AccessConfig;
use crate::core::members::{InviteMember, MemberService};
use crate::core::models::{Member, Role};
use crate::core::roles::RoleService;
use crate::storage::database::entities::{self, role};
use crate::storage::database::{SeaOrmDatabase, connect_test, member_ops, role_ops};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use std::sync::Arc;
use uuid::Uuid;

/// A migrated engine with no members yet (bootstrap state)
pub(crate) async fn fresh_engine() -> (Arc<SeaOrmDatabase>, RoleService, MemberService) {
    let database = connect_test().await;
    let access = AccessConfig::default();
    let roles = RoleService::new(Arc::clone(&database), access.clone());
    let members = MemberService::new(Arc::clone(&database), access);
    (database, roles, members)
}

/// An engine with one active Owner member bound to `owner_user`
pub(crate) struct TestTeam {
    pub database: Arc<SeaOrmDatabase>,
    pub roles: RoleService,
    pub members: MemberService,
    pub owner_user: Uuid,
    pub owner_member: Member,
}

pub(crate) async fn bootstrapped_team() -> TestTeam {
    let (database, roles, members) = fresh_engine().await;

    let owner_role = role_named(&database, "Owner").await;
    let owner_user = Uuid::new_v4();
    let invited = members
        .invite_member(
            owner_user,
            InviteMember {
                email: "owner@example.com".to_string(),
                name: Some("Team Owner".to_string()),
                role_id: owner_role.id,
            },
        )
        .await
        .expect("bootstrap invite should succeed");

    let owner_member = member_ops::bind_accepted_user(database.connection(), invited.id, owner_user)
        .await
        .expect("owner activation should succeed");

    TestTeam {
        database,
        roles,
        members,
        owner_user,
        owner_member,
    }
}

/// Look up a seeded role by name, with its matrix
pub(crate) async fn role_named(database: &SeaOrmDatabase, name: &str) -> Role {
    let model = entities::Role::find()
        .filter(role::Column::Name.eq(name))
        .one(database.connection())
        .await
        .unwrap()
        .expect("seeded role should exist");

    role_ops::find_role(database.connection(), model.id)
        .await
        .unwrap()
        .unwrap()
}

/// Invite a member as the owner and activate them under a fresh user account
pub(crate) async fn add_active_member(
    team: &TestTeam,
    email: &str,
    role_id: Uuid,
) -> (Uuid, Member) {
    let invited = team
        .members
        .invite_member(
            team.owner_user,
            InviteMember {
                email: email.to_string(),
                name: None,
                role_id,
            },
        )
        .await
        .expect("owner invite should succeed");

    let user_id = Uuid::new_v4();
    let member = member_ops::bind_accepted_user(team.database.connection(), invited.id, user_id)
        .await
        .expect("activation should succeed");

    (user_id, member)
}

//! Shared fixtures for integration tests
//!
//! All fixtures create real objects against a migrated in-memory SQLite
//! database, not mocks.

use std::sync::Arc;
use teamgate::config::{AccessConfig, DatabaseConfig};
use teamgate::core::members::{InviteMember, MemberService};
use teamgate::core::modules::ModuleCatalog;
use teamgate::core::roles::RoleService;
use teamgate::storage::database::{SeaOrmDatabase, member_ops};
use teamgate::{Member, Role};
use uuid::Uuid;

/// A fully provisioned engine with one active Owner member
pub struct TestTeam {
    pub database: Arc<SeaOrmDatabase>,
    pub modules: ModuleCatalog,
    pub roles: RoleService,
    pub members: MemberService,
    pub owner_user: Uuid,
    pub owner_member: Member,
}

/// Migrated engine with no members yet (bootstrap state)
pub async fn empty_engine() -> TestEngine {
    empty_engine_with(AccessConfig::default()).await
}

/// Migrated engine with custom access policy
pub async fn empty_engine_with(access: AccessConfig) -> TestEngine {
    let database_config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        ..Default::default()
    };
    let database = Arc::new(SeaOrmDatabase::new(&database_config).await.unwrap());
    database.migrate().await.unwrap();

    TestEngine {
        modules: ModuleCatalog::new(Arc::clone(&database)),
        roles: RoleService::new(Arc::clone(&database), access.clone()),
        members: MemberService::new(Arc::clone(&database), access),
        database,
    }
}

/// Engine services over a shared database
pub struct TestEngine {
    pub database: Arc<SeaOrmDatabase>,
    pub modules: ModuleCatalog,
    pub roles: RoleService,
    pub members: MemberService,
}

/// Engine with one active Owner member bound to `owner_user`
pub async fn team_with_owner() -> TestTeam {
    let engine = empty_engine().await;

    let owner_role = role_named(&engine.roles, "Owner").await;
    let owner_user = Uuid::new_v4();
    let invited = engine
        .members
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

    let owner_member =
        member_ops::bind_accepted_user(engine.database.connection(), invited.id, owner_user)
            .await
            .expect("owner activation should succeed");

    TestTeam {
        database: engine.database,
        modules: engine.modules,
        roles: engine.roles,
        members: engine.members,
        owner_user,
        owner_member,
    }
}

/// Look up a seeded role by name
pub async fn role_named(roles: &RoleService, name: &str) -> Role {
    roles
        .list_roles()
        .await
        .unwrap()
        .into_iter()
        .find(|role| role.name == name)
        .expect("seeded role should exist")
}

/// Invite a member as the owner and activate them under a fresh user account
pub async fn add_active_member(team: &TestTeam, email: &str, role_id: Uuid) -> (Uuid, Member) {
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

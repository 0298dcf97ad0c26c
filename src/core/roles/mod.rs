//! Role store operations

mod summary;

pub use summary::permission_summary;

use crate::config::{AccessConfig, AuthorizationMode};
use crate::core::access::{ActorContext, PrivilegeGuard};
use crate::core::models::{PermissionMatrix, Role};
use crate::storage::database::role_ops::{self, NewRole};
use crate::storage::database::{SeaOrmDatabase, module_ops};
use crate::utils::error::{AccessError, Result};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Request to create a custom role
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRole {
    /// Role name
    pub name: String,
    /// Role description
    #[serde(default)]
    pub description: Option<String>,
    /// Full permission matrix, keyed by module key
    #[serde(default)]
    pub permissions: PermissionMatrix,
}

/// Request to update a custom role
///
/// The submitted matrix replaces the stored one entirely.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRole {
    /// Role name
    pub name: String,
    /// Role description
    #[serde(default)]
    pub description: Option<String>,
    /// Full desired permission matrix
    #[serde(default)]
    pub permissions: PermissionMatrix,
}

/// Request to duplicate a role
#[derive(Debug, Clone, Deserialize)]
pub struct DuplicateRole {
    /// Name for the duplicate
    pub name: String,
}

/// Role store
///
/// Stateless over the backing store: every operation resolves the caller
/// context by a fresh read and runs its checks and writes inside a single
/// transaction.
pub struct RoleService {
    database: Arc<SeaOrmDatabase>,
    access: AccessConfig,
}

impl RoleService {
    /// Create a new role service
    pub fn new(database: Arc<SeaOrmDatabase>, access: AccessConfig) -> Self {
        Self { database, access }
    }

    /// List all roles with embedded permission matrices
    pub async fn list_roles(&self) -> Result<Vec<Role>> {
        role_ops::list_roles(self.database.connection()).await
    }

    /// Create a custom role
    ///
    /// The new role's privilege level is computed from the actor, never
    /// supplied by the caller.
    pub async fn create_role(&self, actor_id: Uuid, request: CreateRole) -> Result<Role> {
        let name = request.name.trim().to_string();
        if name.is_empty() {
            return Err(AccessError::validation("Role name is required"));
        }

        info!("Creating role: {}", name);

        let txn = self.database.begin().await?;
        let ctx = ActorContext::resolve(&txn, actor_id).await?;
        let guard = PrivilegeGuard::new(&self.access);

        self.require_resolvable_actor(&ctx)?;
        if !guard.can_manage_roles(&ctx) {
            return Err(AccessError::escalation(
                "Actor is not allowed to manage roles",
            ));
        }

        let role = role_ops::insert_role(
            &txn,
            NewRole {
                name,
                description: clean_description(request.description),
                is_system_role: false,
                privilege_level: guard.creation_privilege(&ctx),
                created_by: Some(actor_id),
                permissions: request.permissions,
            },
        )
        .await?;

        txn.commit().await?;
        info!("Role created successfully: {}", role.id);
        Ok(role)
    }

    /// Update a custom role's name, description, and permission matrix
    pub async fn update_role(
        &self,
        actor_id: Uuid,
        role_id: Uuid,
        request: UpdateRole,
    ) -> Result<Role> {
        let name = request.name.trim().to_string();
        if name.is_empty() {
            return Err(AccessError::validation("Role name is required"));
        }

        info!("Updating role: {}", role_id);

        let txn = self.database.begin().await?;

        let model = role_ops::find_role_row(&txn, role_id)
            .await?
            .ok_or_else(|| AccessError::not_found("Role not found"))?;
        if model.is_system_role {
            return Err(AccessError::SystemRoleImmutable);
        }

        let ctx = ActorContext::resolve(&txn, actor_id).await?;
        let guard = PrivilegeGuard::new(&self.access);
        if !guard.can_manage_roles(&ctx) {
            return Err(AccessError::escalation(
                "Actor is not allowed to manage roles",
            ));
        }

        role_ops::update_role_row(&txn, model, name, clean_description(request.description))
            .await?;
        role_ops::replace_matrix(&txn, role_id, &request.permissions).await?;

        let role = role_ops::find_role(&txn, role_id)
            .await?
            .ok_or_else(|| AccessError::internal("Role missing after update"))?;

        txn.commit().await?;
        Ok(role)
    }

    /// Delete a custom role with no referencing members
    pub async fn delete_role(&self, actor_id: Uuid, role_id: Uuid) -> Result<()> {
        info!("Deleting role: {}", role_id);

        let txn = self.database.begin().await?;

        let model = role_ops::find_role_row(&txn, role_id)
            .await?
            .ok_or_else(|| AccessError::not_found("Role not found"))?;
        if model.is_system_role {
            return Err(AccessError::SystemRoleImmutable);
        }

        let ctx = ActorContext::resolve(&txn, actor_id).await?;
        let guard = PrivilegeGuard::new(&self.access);
        if !guard.can_manage_roles(&ctx) {
            return Err(AccessError::escalation(
                "Actor is not allowed to manage roles",
            ));
        }

        let referencing_members = role_ops::count_members_with_role(&txn, role_id).await?;
        if referencing_members > 0 {
            return Err(AccessError::RoleInUse(referencing_members));
        }

        role_ops::delete_role_row(&txn, role_id).await?;
        txn.commit().await?;

        info!("Role deleted successfully: {}", role_id);
        Ok(())
    }

    /// Duplicate a role's permission matrix into a new custom role
    ///
    /// The duplicate's privilege level is recomputed from the actor, never
    /// copied from the source.
    pub async fn duplicate_role(
        &self,
        actor_id: Uuid,
        role_id: Uuid,
        request: DuplicateRole,
    ) -> Result<Role> {
        let name = request.name.trim().to_string();
        if name.is_empty() {
            return Err(AccessError::validation("Role name is required"));
        }

        info!("Duplicating role: {}", role_id);

        let txn = self.database.begin().await?;
        let ctx = ActorContext::resolve(&txn, actor_id).await?;
        let guard = PrivilegeGuard::new(&self.access);

        self.require_resolvable_actor(&ctx)?;
        if !guard.can_manage_roles(&ctx) {
            return Err(AccessError::escalation(
                "Actor is not allowed to manage roles",
            ));
        }

        let source = role_ops::find_role(&txn, role_id)
            .await?
            .ok_or_else(|| AccessError::not_found("Role not found"))?;

        let role = role_ops::insert_role(
            &txn,
            NewRole {
                name,
                description: Some(format!("Copy of {}", source.name)),
                is_system_role: false,
                privilege_level: guard.creation_privilege(&ctx),
                created_by: Some(actor_id),
                permissions: source.permissions,
            },
        )
        .await?;

        txn.commit().await?;
        info!("Role duplicated successfully: {}", role.id);
        Ok(role)
    }

    /// Render the capability summary for a permission matrix
    pub async fn permission_summary(&self, permissions: &PermissionMatrix) -> Result<String> {
        let modules = module_ops::list_modules(self.database.connection()).await?;
        Ok(permission_summary(&modules, permissions))
    }

    fn require_resolvable_actor(&self, ctx: &ActorContext) -> Result<()> {
        if self.access.mode == AuthorizationMode::Enforced
            && ctx.role.is_none()
            && !ctx.is_bootstrap
        {
            return Err(AccessError::not_authorized(
                "Actor has no role on this team",
            ));
        }
        Ok(())
    }
}

fn clean_description(description: Option<String>) -> Option<String> {
    description
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
}

//! Role store queries

use crate::core::models::{PermissionLevel, PermissionMatrix, Role};
use crate::utils::error::{AccessError, Result};
use chrono::Utc;
use sea_orm::*;
use std::collections::HashMap;
use tracing::debug;
use uuid::Uuid;

use super::entities::{self, role, role_permission, team_member};
use super::module_ops;

/// Fields for a new role row
pub struct NewRole {
    pub name: String,
    pub description: Option<String>,
    pub is_system_role: bool,
    pub privilege_level: i32,
    pub created_by: Option<Uuid>,
    pub permissions: PermissionMatrix,
}

/// Find a role with its permission matrix
pub async fn find_role<C: ConnectionTrait>(conn: &C, role_id: Uuid) -> Result<Option<Role>> {
    let Some(model) = entities::Role::find_by_id(role_id).one(conn).await? else {
        return Ok(None);
    };

    let matrix = load_matrix(conn, role_id).await?;
    Ok(Some(model.to_domain_role(matrix)))
}

/// Find a bare role row without its matrix
pub async fn find_role_row<C: ConnectionTrait>(
    conn: &C,
    role_id: Uuid,
) -> Result<Option<role::Model>> {
    Ok(entities::Role::find_by_id(role_id).one(conn).await?)
}

/// List all roles with embedded matrices, most privileged first
pub async fn list_roles<C: ConnectionTrait>(conn: &C) -> Result<Vec<Role>> {
    let keys = module_ops::key_index(conn).await?;

    let models = entities::Role::find()
        .order_by_desc(role::Column::PrivilegeLevel)
        .order_by_asc(role::Column::Name)
        .all(conn)
        .await?;

    let rows = entities::RolePermission::find().all(conn).await?;
    let mut matrices: HashMap<Uuid, PermissionMatrix> = HashMap::new();
    for row in rows {
        if let Some(key) = keys.get(&row.module_id) {
            matrices
                .entry(row.role_id)
                .or_default()
                .insert(key.clone(), row.permission_level.parse().unwrap_or_default());
        }
    }

    Ok(models
        .into_iter()
        .map(|m| {
            let matrix = matrices.remove(&m.id).unwrap_or_default();
            m.to_domain_role(matrix)
        })
        .collect())
}

/// Insert a role row and its matrix, returning the assembled role
pub async fn insert_role<C: ConnectionTrait>(conn: &C, new_role: NewRole) -> Result<Role> {
    debug!("Creating role: {}", new_role.name);

    let role_id = Uuid::new_v4();
    let now = Utc::now();

    role::ActiveModel {
        id: Set(role_id),
        name: Set(new_role.name),
        description: Set(new_role.description),
        is_system_role: Set(new_role.is_system_role),
        privilege_level: Set(new_role.privilege_level),
        created_by: Set(new_role.created_by),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
    .insert(conn)
    .await?;

    insert_matrix_rows(conn, role_id, &new_role.permissions).await?;

    find_role(conn, role_id)
        .await?
        .ok_or_else(|| AccessError::internal("Role missing immediately after insert"))
}

/// Update a role's name and description
pub async fn update_role_row<C: ConnectionTrait>(
    conn: &C,
    model: role::Model,
    name: String,
    description: Option<String>,
) -> Result<()> {
    let mut active: role::ActiveModel = model.into();
    active.name = Set(name);
    active.description = Set(description);
    active.updated_at = Set(Utc::now().into());

    active.update(conn).await?;
    Ok(())
}

/// Replace the role's entire matrix (delete-then-insert, not a merge)
pub async fn replace_matrix<C: ConnectionTrait>(
    conn: &C,
    role_id: Uuid,
    permissions: &PermissionMatrix,
) -> Result<()> {
    entities::RolePermission::delete_many()
        .filter(role_permission::Column::RoleId.eq(role_id))
        .exec(conn)
        .await?;

    insert_matrix_rows(conn, role_id, permissions).await
}

/// Count members referencing a role
pub async fn count_members_with_role<C: ConnectionTrait>(conn: &C, role_id: Uuid) -> Result<u64> {
    Ok(entities::TeamMember::find()
        .filter(team_member::Column::RoleId.eq(role_id))
        .count(conn)
        .await?)
}

/// Delete a role row; matrix rows cascade
pub async fn delete_role_row<C: ConnectionTrait>(conn: &C, role_id: Uuid) -> Result<()> {
    entities::Role::delete_by_id(role_id).exec(conn).await?;
    Ok(())
}

async fn load_matrix<C: ConnectionTrait>(conn: &C, role_id: Uuid) -> Result<PermissionMatrix> {
    let keys = module_ops::key_index(conn).await?;

    let rows = entities::RolePermission::find()
        .filter(role_permission::Column::RoleId.eq(role_id))
        .all(conn)
        .await?;

    let mut matrix = PermissionMatrix::new();
    for row in rows {
        if let Some(key) = keys.get(&row.module_id) {
            matrix.insert(key.clone(), row.permission_level.parse().unwrap_or_default());
        }
    }

    Ok(matrix)
}

/// Insert matrix rows, dropping unknown module keys to tolerate stale
/// catalogs. Explicit `none` entries are dropped too; absence is equivalent.
async fn insert_matrix_rows<C: ConnectionTrait>(
    conn: &C,
    role_id: Uuid,
    permissions: &PermissionMatrix,
) -> Result<()> {
    let ids = module_ops::id_index(conn).await?;

    let rows: Vec<role_permission::ActiveModel> = permissions
        .iter()
        .filter(|(_, level)| **level != PermissionLevel::None)
        .filter_map(|(key, level)| {
            ids.get(key).map(|module_id| role_permission::ActiveModel {
                id: Set(Uuid::new_v4()),
                role_id: Set(role_id),
                module_id: Set(*module_id),
                permission_level: Set(level.as_str().to_string()),
            })
        })
        .collect();

    if !rows.is_empty() {
        entities::RolePermission::insert_many(rows).exec(conn).await?;
    }

    Ok(())
}

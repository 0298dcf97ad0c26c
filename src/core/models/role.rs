//! Role entity

use super::permission::{PermissionLevel, PermissionMatrix};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role entity with its embedded permission matrix
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    /// Unique role identifier
    pub id: Uuid,
    /// Role name
    pub name: String,
    /// Role description
    pub description: Option<String>,
    /// Whether this is a seeded system role (immutable, indestructible)
    pub is_system_role: bool,
    /// Position in the privilege hierarchy; higher is more powerful.
    /// Fixed at creation time for custom roles.
    pub privilege_level: i32,
    /// User who created the role
    pub created_by: Option<Uuid>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
    /// Permission matrix, keyed by module key
    pub permissions: PermissionMatrix,
}

impl Role {
    /// Level granted on a module; absent entries are `none`
    pub fn level_for(&self, module_key: &str) -> PermissionLevel {
        self.permissions
            .get(module_key)
            .copied()
            .unwrap_or_default()
    }
}

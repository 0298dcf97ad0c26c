use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Role database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "roles")]
pub struct Model {
    /// Role ID (UUID)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Role name
    pub name: String,

    /// Role description (optional)
    pub description: Option<String>,

    /// Whether this is a seeded system role
    pub is_system_role: bool,

    /// Position in the privilege hierarchy
    pub privilege_level: i32,

    /// User who created the role
    pub created_by: Option<Uuid>,

    /// Creation timestamp
    pub created_at: DateTimeWithTimeZone,

    /// Last update timestamp
    pub updated_at: DateTimeWithTimeZone,
}

/// Role entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Permission matrix entries
    #[sea_orm(has_many = "super::role_permission::Entity")]
    RolePermissions,

    /// Members assigned this role
    #[sea_orm(has_many = "super::team_member::Entity")]
    TeamMembers,
}

impl Related<super::role_permission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RolePermissions.def()
    }
}

impl Related<super::team_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeamMembers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert SeaORM model to the domain role type
    ///
    /// The permission matrix is assembled by the caller from
    /// `role_permissions` rows joined against the module catalog.
    pub fn to_domain_role(
        &self,
        permissions: crate::core::models::PermissionMatrix,
    ) -> crate::core::models::Role {
        crate::core::models::Role {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            is_system_role: self.is_system_role,
            privilege_level: self.privilege_level,
            created_by: self.created_by,
            created_at: self.created_at.with_timezone(&chrono::Utc),
            updated_at: self.updated_at.with_timezone(&chrono::Utc),
            permissions,
        }
    }
}

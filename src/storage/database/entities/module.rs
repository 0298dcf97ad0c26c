use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Module catalog database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "modules")]
pub struct Model {
    /// Module ID (UUID)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Stable module key (unique)
    #[sea_orm(unique)]
    pub key: String,

    /// Display name
    pub name: String,

    /// Position in display ordering
    pub display_order: i32,
}

/// Module entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Permission matrix entries referencing this module
    #[sea_orm(has_many = "super::role_permission::Entity")]
    RolePermissions,
}

impl Related<super::role_permission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RolePermissions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert SeaORM model to the domain module type
    pub fn to_domain_module(&self) -> crate::core::models::Module {
        crate::core::models::Module {
            id: self.id,
            key: self.key.clone(),
            name: self.name.clone(),
            display_order: self.display_order,
        }
    }
}

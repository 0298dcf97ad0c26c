use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Team member database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "team_members")]
pub struct Model {
    /// Member ID (UUID)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Email address, stored normalized (trimmed lowercase, unique)
    #[sea_orm(unique)]
    pub email: String,

    /// Display name (optional)
    pub name: Option<String>,

    /// Assigned role
    pub role_id: Uuid,

    /// Membership status
    pub status: String,

    /// User who sent the invite
    pub invited_by: Option<Uuid>,

    /// When the invite was last sent
    pub invited_at: DateTimeWithTimeZone,

    /// User account bound on acceptance
    pub user_id: Option<Uuid>,

    /// Creation timestamp
    pub created_at: DateTimeWithTimeZone,

    /// Last update timestamp
    pub updated_at: DateTimeWithTimeZone,
}

/// Team member relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Assigned role
    #[sea_orm(
        belongs_to = "super::role::Entity",
        from = "Column::RoleId",
        to = "super::role::Column::Id"
    )]
    Role,
}

impl Related<super::role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Role.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert SeaORM model to the domain member type
    ///
    /// The assigned role is resolved by the caller.
    pub fn to_domain_member(&self, role: crate::core::models::Role) -> crate::core::models::Member {
        crate::core::models::Member {
            id: self.id,
            email: self.email.clone(),
            name: self.name.clone(),
            role_id: self.role_id,
            role,
            status: crate::core::models::MemberStatus::from_str(&self.status)
                .unwrap_or(crate::core::models::MemberStatus::Pending),
            invited_by: self.invited_by,
            invited_at: self.invited_at.with_timezone(&chrono::Utc),
            user_id: self.user_id,
            created_at: self.created_at.with_timezone(&chrono::Utc),
            updated_at: self.updated_at.with_timezone(&chrono::Utc),
        }
    }
}

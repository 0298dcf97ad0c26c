use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use sea_orm_migration::prelude::*;
use uuid::Uuid;

use crate::core::models::PermissionLevel;
use crate::storage::database::entities::{self, module, role, role_permission};

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Seed catalog: stable module keys with display names
const MODULES: &[(&str, &str)] = &[
    ("user_management", "User Management"),
    ("payroll", "Payroll"),
    ("contracts", "Contracts"),
    ("compliance", "Compliance"),
    ("reports", "Reports"),
    ("settings", "Settings"),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        let now: sea_orm::prelude::DateTimeWithTimeZone = chrono::Utc::now().into();

        let mut module_ids = Vec::with_capacity(MODULES.len());
        for (order, (key, name)) in MODULES.iter().enumerate() {
            let id = Uuid::new_v4();
            module::ActiveModel {
                id: Set(id),
                key: Set(ToString::to_string(key)),
                name: Set(ToString::to_string(name)),
                display_order: Set(order as i32 + 1),
            }
            .insert(db)
            .await?;
            module_ids.push((*key, id));
        }

        // Baseline access tiers; these rows are immutable and indestructible
        // through the engine.
        let system_roles: &[(&str, &str, i32)] = &[
            ("Owner", "Full control of the team and every module", 100),
            ("Administrator", "Administrative access to every module", 90),
            ("Manager", "Operational management without user administration", 80),
            ("Viewer", "Read-only access to every module", 10),
        ];

        for &(name, description, privilege_level) in system_roles {
            let role_id = Uuid::new_v4();
            role::ActiveModel {
                id: Set(role_id),
                name: Set(name.to_string()),
                description: Set(Some(description.to_string())),
                is_system_role: Set(true),
                privilege_level: Set(privilege_level),
                created_by: Set(None),
                created_at: Set(now),
                updated_at: Set(now),
            }
            .insert(db)
            .await?;

            for &(key, module_id) in &module_ids {
                let level = seeded_level(name, key);
                if level == PermissionLevel::None {
                    continue;
                }
                role_permission::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    role_id: Set(role_id),
                    module_id: Set(module_id),
                    permission_level: Set(level.as_str().to_string()),
                }
                .insert(db)
                .await?;
            }
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        entities::TeamMember::delete_many().exec(db).await?;
        entities::RolePermission::delete_many().exec(db).await?;
        entities::Role::delete_many()
            .filter(role::Column::IsSystemRole.eq(true))
            .exec(db)
            .await?;
        entities::Module::delete_many().exec(db).await?;

        Ok(())
    }
}

/// Permission level a seeded role receives on a seeded module
fn seeded_level(role_name: &str, module_key: &str) -> PermissionLevel {
    match role_name {
        "Owner" | "Administrator" => PermissionLevel::Admin,
        "Manager" => match module_key {
            "payroll" | "contracts" | "reports" => PermissionLevel::Manage,
            _ => PermissionLevel::View,
        },
        "Viewer" => PermissionLevel::View,
        _ => PermissionLevel::None,
    }
}

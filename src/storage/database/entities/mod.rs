//! Database entity models

pub mod module;
pub mod role;
pub mod role_permission;
pub mod team_member;

pub use module::Entity as Module;
pub use role::Entity as Role;
pub use role_permission::Entity as RolePermission;
pub use team_member::Entity as TeamMember;

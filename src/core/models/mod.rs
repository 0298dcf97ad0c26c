//! Core entity types for the access control engine

pub mod member;
pub mod module;
pub mod permission;
pub mod role;

pub use member::{Member, MemberStatus};
pub use module::Module;
pub use permission::{PermissionLevel, PermissionMatrix};
pub use role::Role;

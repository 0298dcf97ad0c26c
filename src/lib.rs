//! # Teamgate
//!
//! Team access control service: a database-backed role-based authorization
//! engine with privilege-escalation guards and member lifecycle management.
//!
//! ## Features
//!
//! - **Module catalog**: seeded registry of protected resource areas
//! - **Role store**: custom roles with per-module permission matrices;
//!   seeded system roles are immutable and indestructible
//! - **Privilege guard**: pure decision functions preventing an actor from
//!   creating or granting more power than they hold
//! - **Member lifecycle**: invite, reassign, resend, remove, with
//!   case-insensitive email uniqueness and a self-removal guard
//! - **Bootstrap policy**: a freshly provisioned team can always assign its
//!   first role without being locked out
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use teamgate::config::Config;
//! use teamgate::core::members::MemberService;
//! use teamgate::core::roles::RoleService;
//! use teamgate::storage::database::SeaOrmDatabase;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let database = Arc::new(SeaOrmDatabase::new(&config.database).await?);
//!     database.migrate().await?;
//!
//!     let roles = RoleService::new(Arc::clone(&database), config.access.clone());
//!     let _members = MemberService::new(database, config.access.clone());
//!
//!     for role in roles.list_roles().await? {
//!         println!("{} (level {})", role.name, role.privilege_level);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod server;
pub mod storage;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use utils::error::{AccessError, Result};

pub use core::access::{ActorContext, PrivilegeGuard};
pub use core::members::MemberService;
pub use core::models::{Member, MemberStatus, Module, PermissionLevel, PermissionMatrix, Role};
pub use core::modules::ModuleCatalog;
pub use core::roles::{RoleService, permission_summary};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");

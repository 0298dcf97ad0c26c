//! Configuration model structures

pub mod access;
pub mod database;
pub mod server;

pub use access::{AccessConfig, AuthorizationMode};
pub use database::DatabaseConfig;
pub use server::ServerConfig;

//! Database access layer
//!
//! Query helpers are free functions generic over [`sea_orm::ConnectionTrait`]
//! so services can run them against the shared connection or compose several
//! inside a single transaction.

pub mod entities;
pub mod migration;

mod connection;
pub mod member_ops;
pub mod module_ops;
pub mod role_ops;

pub use connection::SeaOrmDatabase;

#[cfg(test)]
pub(crate) use connection::connect_test;

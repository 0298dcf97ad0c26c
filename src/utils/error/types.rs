//! Error types for the access control engine

use thiserror::Error;

/// Result type alias for the engine
pub type Result<T> = std::result::Result<T, AccessError>;

/// Main error type for the engine
///
/// Every variant is a recoverable, caller-facing error; none is treated as
/// fatal to the process. Persistence failures pass through unmodified inside
/// the `Database` variant.
#[derive(Error, Debug)]
pub enum AccessError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database errors
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Validation errors (missing or malformed input)
    #[error("Validation error: {0}")]
    Validation(String),

    /// A referenced role or member does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Actor has no resolvable role and the system is not bootstrapping
    #[error("Not authorized: {0}")]
    NotAuthorized(String),

    /// Attempted to grant or keep more privilege than the actor holds
    #[error("Privilege escalation blocked: {0}")]
    PrivilegeEscalation(String),

    /// Mutation or deletion attempted on a system role
    #[error("System roles cannot be modified or deleted")]
    SystemRoleImmutable,

    /// Role deletion blocked by referencing members; carries the exact count
    #[error("Role is assigned to {0} member(s) and cannot be deleted")]
    RoleInUse(u64),

    /// Invite targets an email already on the team
    #[error("A member with this email address already exists")]
    DuplicateEmail,

    /// Actor attempted to remove their own membership
    #[error("Members cannot remove their own membership")]
    SelfRemoval,

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

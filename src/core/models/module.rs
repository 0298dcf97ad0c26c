//! Module catalog entries

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A protected resource area subject to permission checks
///
/// Modules are provisioned by the system seed and never mutated by the
/// engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Module {
    /// Unique module identifier
    pub id: Uuid,
    /// Stable module key (unique)
    pub key: String,
    /// Display name
    pub name: String,
    /// Position in display ordering
    pub display_order: i32,
}

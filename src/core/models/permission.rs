//! Permission levels and the per-role permission matrix

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Permission matrix: module key to granted level
///
/// Absence of a module key is equivalent to [`PermissionLevel::None`].
pub type PermissionMatrix = BTreeMap<String, PermissionLevel>;

/// Capability level within a module
///
/// The variant order is the authorization order used for comparisons:
/// `None < View < Manage < Approve < Admin`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum PermissionLevel {
    /// No access
    #[default]
    None,
    /// Read-only access
    View,
    /// Create and update records
    Manage,
    /// Manage plus approval authority
    Approve,
    /// Full control of the module
    Admin,
}

impl PermissionLevel {
    /// Whether this level grants management capability within a module
    pub fn is_manageable(self) -> bool {
        matches!(self, Self::Manage | Self::Approve | Self::Admin)
    }

    /// Stable string form used in storage
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::View => "view",
            Self::Manage => "manage",
            Self::Approve => "approve",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for PermissionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PermissionLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "view" => Ok(Self::View),
            "manage" => Ok(Self::Manage),
            "approve" => Ok(Self::Approve),
            "admin" => Ok(Self::Admin),
            other => Err(format!("Unknown permission level: {}", other)),
        }
    }
}

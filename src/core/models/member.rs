//! Team member entity

use super::role::Role;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Membership lifecycle status
///
/// `Pending` becomes `Active` through an out-of-band acceptance event that
/// binds the member to a user account; there is no transition back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    /// Invited, not yet accepted
    Pending,
    /// Accepted and bound to a user account
    Active,
}

impl MemberStatus {
    /// Stable string form used in storage
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Active => "active",
        }
    }
}

impl fmt::Display for MemberStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MemberStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "active" => Ok(Self::Active),
            other => Err(format!("Unknown member status: {}", other)),
        }
    }
}

/// Team member with its embedded role
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    /// Unique member identifier
    pub id: Uuid,
    /// Email address, normalized to trimmed lowercase; unique across the team
    pub email: String,
    /// Display name
    pub name: Option<String>,
    /// Assigned role identifier
    pub role_id: Uuid,
    /// Assigned role with its permission matrix
    pub role: Role,
    /// Membership status
    pub status: MemberStatus,
    /// User who sent the invite
    pub invited_by: Option<Uuid>,
    /// When the invite was last sent
    pub invited_at: DateTime<Utc>,
    /// User account bound on acceptance
    pub user_id: Option<Uuid>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

//! Authorization policy configuration

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Authorization enforcement mode
///
/// `AllowAll` disables privilege checks entirely and is intended for demo and
/// development environments. Intrinsic data invariants (system-role
/// immutability, email uniqueness, self-removal, role-in-use) are enforced in
/// every mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorizationMode {
    /// Privilege checks are enforced
    Enforced,
    /// All privilege checks pass unconditionally
    AllowAll,
}

/// Authorization policy configuration
///
/// The thresholds and the custom-role ceiling are policy constants, injected
/// here rather than hardcoded in business logic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessConfig {
    /// Enforcement mode
    #[serde(default = "default_mode")]
    pub mode: AuthorizationMode,
    /// Privilege level at or above which an actor may manage roles
    #[serde(default = "default_role_management_threshold")]
    pub role_management_threshold: i32,
    /// Privilege level at or above which an actor may invite members
    #[serde(default = "default_invite_threshold")]
    pub invite_threshold: i32,
    /// Ceiling on the privilege level of custom roles
    #[serde(default = "default_custom_role_cap")]
    pub custom_role_cap: i32,
    /// Module key whose admin permission grants role management
    #[serde(default = "default_user_management_module")]
    pub user_management_module: String,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            role_management_threshold: default_role_management_threshold(),
            invite_threshold: default_invite_threshold(),
            custom_role_cap: default_custom_role_cap(),
            user_management_module: default_user_management_module(),
        }
    }
}

impl AccessConfig {
    /// Load access settings from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(mode) = std::env::var("TEAMGATE_AUTHORIZATION_MODE") {
            match mode.as_str() {
                "enforced" => config.mode = AuthorizationMode::Enforced,
                "allow_all" => config.mode = AuthorizationMode::AllowAll,
                other => warn!("Unknown authorization mode {:?}, using default", other),
            }
        }
        config
    }

    /// Merge access configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.mode != default_mode() {
            self.mode = other.mode;
        }
        if other.role_management_threshold != default_role_management_threshold() {
            self.role_management_threshold = other.role_management_threshold;
        }
        if other.invite_threshold != default_invite_threshold() {
            self.invite_threshold = other.invite_threshold;
        }
        if other.custom_role_cap != default_custom_role_cap() {
            self.custom_role_cap = other.custom_role_cap;
        }
        if other.user_management_module != default_user_management_module() {
            self.user_management_module = other.user_management_module;
        }
        self
    }

    /// Validate access configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.custom_role_cap < 1 {
            return Err("Custom role cap must be at least 1".to_string());
        }

        if self.invite_threshold > self.role_management_threshold {
            return Err(
                "Invite threshold cannot exceed the role management threshold".to_string(),
            );
        }

        if self.user_management_module.is_empty() {
            return Err("User management module key cannot be empty".to_string());
        }

        if self.mode == AuthorizationMode::AllowAll {
            warn!(
                "Authorization mode is allow_all! Privilege checks are disabled. Do not use this mode in production."
            );
        }

        Ok(())
    }
}

fn default_mode() -> AuthorizationMode {
    AuthorizationMode::Enforced
}

fn default_role_management_threshold() -> i32 {
    100
}

fn default_invite_threshold() -> i32 {
    80
}

fn default_custom_role_cap() -> i32 {
    50
}

fn default_user_management_module() -> String {
    "user_management".to_string()
}

//! Helper functions for creating specific error types

use super::types::AccessError;

/// Helper functions for creating specific errors
impl AccessError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    pub fn not_authorized<S: Into<String>>(message: S) -> Self {
        Self::NotAuthorized(message.into())
    }

    pub fn escalation<S: Into<String>>(message: S) -> Self {
        Self::PrivilegeEscalation(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }
}

//! HTTP response handling for errors

use super::types::AccessError;
use actix_web::{HttpResponse, ResponseError};

impl ResponseError for AccessError {
    fn error_response(&self) -> HttpResponse {
        let (status_code, error_code, message) = match self {
            AccessError::Config(_) => (
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "CONFIG_ERROR",
                self.to_string(),
            ),
            AccessError::Database(_) => (
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "DATABASE_ERROR",
                "Database operation failed".to_string(),
            ),
            AccessError::Validation(_) => (
                actix_web::http::StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                self.to_string(),
            ),
            AccessError::NotFound(_) => (
                actix_web::http::StatusCode::NOT_FOUND,
                "NOT_FOUND",
                self.to_string(),
            ),
            AccessError::NotAuthorized(_) => (
                actix_web::http::StatusCode::UNAUTHORIZED,
                "NOT_AUTHORIZED",
                self.to_string(),
            ),
            AccessError::PrivilegeEscalation(_) => (
                actix_web::http::StatusCode::FORBIDDEN,
                "PRIVILEGE_ESCALATION",
                self.to_string(),
            ),
            AccessError::SystemRoleImmutable => (
                actix_web::http::StatusCode::FORBIDDEN,
                "SYSTEM_ROLE_IMMUTABLE",
                self.to_string(),
            ),
            AccessError::RoleInUse(_) => (
                actix_web::http::StatusCode::CONFLICT,
                "ROLE_IN_USE",
                self.to_string(),
            ),
            AccessError::DuplicateEmail => (
                actix_web::http::StatusCode::CONFLICT,
                "DUPLICATE_EMAIL",
                self.to_string(),
            ),
            AccessError::SelfRemoval => (
                actix_web::http::StatusCode::FORBIDDEN,
                "SELF_REMOVAL",
                self.to_string(),
            ),
            _ => (
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            ),
        };

        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: error_code.to_string(),
                message,
                timestamp: chrono::Utc::now().timestamp(),
            },
        };

        HttpResponse::build(status_code).json(error_response)
    }
}

/// Standard error response format
#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail structure
#[derive(serde::Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub timestamp: i64,
}

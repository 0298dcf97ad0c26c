//! Health endpoint

use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::{HttpResponse, web};

/// Liveness check including a database ping
/// GET /health
pub async fn health(data: web::Data<AppState>) -> Result<HttpResponse> {
    data.database.health_check().await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION,
    })))
}

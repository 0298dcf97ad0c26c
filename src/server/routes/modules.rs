//! Module catalog endpoints

use crate::server::state::AppState;
use crate::utils::error::Result;
use actix_web::{HttpResponse, web};

/// List the module catalog in display order
/// GET /api/v1/modules
pub async fn list_modules(data: web::Data<AppState>) -> Result<HttpResponse> {
    let modules = data.modules.list_modules().await?;
    Ok(HttpResponse::Ok().json(modules))
}

/// Look up a module by its stable key
/// GET /api/v1/modules/{key}
pub async fn get_module(data: web::Data<AppState>, path: web::Path<String>) -> Result<HttpResponse> {
    let module = data.modules.get_module_by_key(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(module))
}

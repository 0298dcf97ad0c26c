//! Module catalog queries

use crate::core::models::Module;
use crate::utils::error::Result;
use sea_orm::*;
use std::collections::HashMap;
use uuid::Uuid;

use super::entities::{self, module};

/// List the catalog in display order
pub async fn list_modules<C: ConnectionTrait>(conn: &C) -> Result<Vec<Module>> {
    let models = entities::Module::find()
        .order_by_asc(module::Column::DisplayOrder)
        .all(conn)
        .await?;

    Ok(models.iter().map(|m| m.to_domain_module()).collect())
}

/// Find a module by its stable key
pub async fn find_module_by_key<C: ConnectionTrait>(conn: &C, key: &str) -> Result<Option<Module>> {
    let model = entities::Module::find()
        .filter(module::Column::Key.eq(key))
        .one(conn)
        .await?;

    Ok(model.map(|m| m.to_domain_module()))
}

/// Map of module id to stable key, for matrix assembly on reads
pub async fn key_index<C: ConnectionTrait>(conn: &C) -> Result<HashMap<Uuid, String>> {
    let models = entities::Module::find().all(conn).await?;
    Ok(models.into_iter().map(|m| (m.id, m.key)).collect())
}

/// Map of stable key to module id, for matrix writes
pub async fn id_index<C: ConnectionTrait>(conn: &C) -> Result<HashMap<String, Uuid>> {
    let models = entities::Module::find().all(conn).await?;
    Ok(models.into_iter().map(|m| (m.key, m.id)).collect())
}

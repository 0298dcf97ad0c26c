//! Module registry
//!
//! Read-only catalog of protected resource areas. Definitions are
//! provisioned by the system seed; the engine exposes no mutation surface.

use crate::core::models::Module;
use crate::storage::database::{SeaOrmDatabase, module_ops};
use crate::utils::error::{AccessError, Result};
use std::sync::Arc;

/// Module registry
pub struct ModuleCatalog {
    database: Arc<SeaOrmDatabase>,
}

impl ModuleCatalog {
    /// Create a new module catalog
    pub fn new(database: Arc<SeaOrmDatabase>) -> Self {
        Self { database }
    }

    /// List the catalog in display order
    pub async fn list_modules(&self) -> Result<Vec<Module>> {
        module_ops::list_modules(self.database.connection()).await
    }

    /// Look up a module by its stable key
    pub async fn get_module_by_key(&self, key: &str) -> Result<Module> {
        module_ops::find_module_by_key(self.database.connection(), key)
            .await?
            .ok_or_else(|| AccessError::not_found(format!("Module not found: {}", key)))
    }
}

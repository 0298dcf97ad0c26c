//! Shared application state

use crate::config::Config;
use crate::core::members::MemberService;
use crate::core::modules::ModuleCatalog;
use crate::core::roles::RoleService;
use crate::storage::database::SeaOrmDatabase;
use std::sync::Arc;

/// Shared state handed to every request handler
pub struct AppState {
    /// Service configuration
    pub config: Config,
    /// Database handle
    pub database: Arc<SeaOrmDatabase>,
    /// Module registry
    pub modules: ModuleCatalog,
    /// Role store
    pub roles: RoleService,
    /// Membership manager
    pub members: MemberService,
}

impl AppState {
    /// Build the application state over a connected database
    pub fn new(config: Config, database: Arc<SeaOrmDatabase>) -> Self {
        Self {
            modules: ModuleCatalog::new(Arc::clone(&database)),
            roles: RoleService::new(Arc::clone(&database), config.access.clone()),
            members: MemberService::new(Arc::clone(&database), config.access.clone()),
            database,
            config,
        }
    }
}

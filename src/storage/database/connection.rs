use crate::config::DatabaseConfig;
use crate::utils::error::Result;
use sea_orm::{ConnectOptions, DatabaseConnection, DatabaseTransaction, TransactionTrait};
use sea_orm_migration::MigratorTrait;
use std::time::Duration;
use tracing::{info, warn};

use super::migration::Migrator;

/// SeaORM-based database handle
#[derive(Debug)]
pub struct SeaOrmDatabase {
    db: DatabaseConnection,
}

impl SeaOrmDatabase {
    /// Create a new database connection
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        // An in-memory SQLite pool must stay on a single connection; every
        // pooled connection would otherwise see its own empty database.
        let max_connections = if config.url.starts_with("sqlite::memory:") {
            1
        } else {
            config.max_connections
        };

        let mut opt = ConnectOptions::new(config.url.clone());
        opt.max_connections(max_connections)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.connection_timeout))
            .acquire_timeout(Duration::from_secs(30))
            .idle_timeout(Duration::from_secs(600))
            .sqlx_logging(true)
            .sqlx_logging_level(log::LevelFilter::Debug);

        let db = sea_orm::Database::connect(opt).await?;

        info!("Database connection established");
        Ok(Self { db })
    }

    /// Run database migrations
    pub async fn migrate(&self) -> Result<()> {
        info!("Running database migrations...");
        Migrator::up(&self.db, None).await.map_err(|e| {
            warn!("Migration failed: {}", e);
            e
        })?;
        info!("Database migrations completed successfully");
        Ok(())
    }

    /// Get the underlying database connection
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Begin a transaction
    pub async fn begin(&self) -> Result<DatabaseTransaction> {
        Ok(self.db.begin().await?)
    }

    /// Health check
    pub async fn health_check(&self) -> Result<()> {
        self.db.ping().await?;
        Ok(())
    }

    /// Close the database connection
    pub async fn close(self) -> Result<()> {
        self.db.close().await?;
        Ok(())
    }
}

/// Migrated in-memory database for tests
#[cfg(test)]
pub(crate) async fn connect_test() -> std::sync::Arc<SeaOrmDatabase> {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        ..Default::default()
    };
    let database = SeaOrmDatabase::new(&config).await.unwrap();
    database.migrate().await.unwrap();
    std::sync::Arc::new(database)
}

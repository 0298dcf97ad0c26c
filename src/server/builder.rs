//! Server bootstrap

use crate::config::Config;
use crate::server::routes;
use crate::server::state::AppState;
use crate::storage::database::SeaOrmDatabase;
use crate::utils::error::Result;
use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use std::sync::Arc;
use tracing::info;
use tracing_actix_web::TracingLogger;

/// Load configuration, connect the store, and run the HTTP server
///
/// Configuration comes from the file named by `TEAMGATE_CONFIG`, falling
/// back to environment variables.
pub async fn run_server() -> Result<()> {
    let config = match std::env::var("TEAMGATE_CONFIG") {
        Ok(path) => Config::from_file(path).await?,
        Err(_) => Config::from_env()?,
    };

    let database = Arc::new(SeaOrmDatabase::new(&config.database).await?);
    database.migrate().await?;

    let address = config.server.address();
    let workers = config.server.worker_count();
    let allowed_origins = config.server.allowed_origins.clone();
    let state = web::Data::new(AppState::new(config, database));

    info!("Starting teamgate on {}", address);

    HttpServer::new(move || {
        let mut cors = Cors::default()
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
            .allow_any_header()
            .max_age(3600);
        for origin in &allowed_origins {
            cors = cors.allowed_origin(origin);
        }

        App::new()
            .wrap(TracingLogger::default())
            .wrap(cors)
            .app_data(state.clone())
            .configure(routes::configure)
    })
    .workers(workers)
    .bind(&address)?
    .run()
    .await?;

    Ok(())
}

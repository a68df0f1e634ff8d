//! TextLens HTTP server
//!
//! Actix-web REST API plus the static analysis page.

pub mod routes;
pub mod state;
pub mod types;

use std::sync::Arc;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{web, App, HttpServer};
use textlens_common::{AppConfig, Result};
use tracing::info;
use tracing_actix_web::TracingLogger;

use crate::state::AppState;

/// Start the HTTP server and block until shutdown
pub async fn start_server(config: AppConfig) -> Result<()> {
    config.validate()?;

    let bind_address = config.server_bind_address();
    let state = Arc::new(AppState::new(config.clone())?);
    let data = web::Data::new(state);

    info!("Starting server on {}", bind_address);

    HttpServer::new(move || {
        // Cross-origin requests are permitted from one fixed origin only.
        let cors = Cors::default()
            .allowed_origin(&config.cors_origin)
            .allowed_methods(vec!["GET", "POST"])
            .allow_any_header();

        App::new()
            .wrap(TracingLogger::default())
            .wrap(cors)
            .app_data(data.clone())
            .service(
                web::scope("/api")
                    .service(routes::analyze::analyze)
                    .service(routes::local::local_analyze),
            )
            .service(Files::new("/", config.static_dir.clone()).index_file("index.html"))
    })
    .bind(&bind_address)?
    .run()
    .await?;

    Ok(())
}

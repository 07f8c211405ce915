//! Server mode
//!
//! Loads the database, then serves the HTTP API until a shutdown signal.

use actix_web::{App, HttpServer, middleware::Compress, web};
use anyhow::{Context, Result};
use std::time::Duration;
use tracing::{info, warn};

use crate::api::configure_routes;
use crate::api::middleware::RequestIdMiddleware;
use crate::api::services::AppStartTime;
use crate::config::StaticConfig;
use crate::runtime::lifetime;
use crate::system::spawn_reload_listener;

/// Run the HTTP server
///
/// **Note**: Logging system must be initialized before calling this function
pub async fn run_server(config: &StaticConfig) -> Result<()> {
    let app_start_time = AppStartTime::now();

    let startup = lifetime::startup::prepare_server_startup(config)
        .await
        .inspect_err(|e| tracing::error!("Server startup failed: {:#}", e))?;

    let reload_listener = spawn_reload_listener(startup.loader.clone());

    let loader = startup.loader.clone();
    let lookup_service = startup.lookup_service.clone();
    let bulk_service = startup.bulk_service.clone();

    let cpu_count = config.server.cpu_count.clamp(1, 32);
    info!("Using {} workers", cpu_count);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(RequestIdMiddleware)
            .wrap(Compress::default())
            .app_data(web::Data::new(loader.clone()))
            .app_data(web::Data::new(lookup_service.clone()))
            .app_data(web::Data::new(bulk_service.clone()))
            .app_data(web::Data::new(app_start_time.clone()))
            .configure(configure_routes)
    })
    .keep_alive(Duration::from_secs(30))
    .client_request_timeout(Duration::from_millis(5000))
    .workers(cpu_count)
    .disable_signals();

    let bind_address = format!("{}:{}", config.server.host, config.server.port);
    warn!("Starting server at http://{}", bind_address);
    let server = server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run();
    let server_handle = server.handle();

    tokio::select! {
        res = server => {
            res?;
        }
        _ = lifetime::shutdown::listen_for_shutdown() => {
            server_handle.stop(true).await;
            warn!("Graceful shutdown: server stopped");
        }
    }

    reload_listener.abort();
    Ok(())
}

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::config::StaticConfig;
use crate::database::{DatabaseHandle, DatabaseOpener, Loader, MaxMindOpener};
use crate::services::{BulkLookupService, LookupService};

pub struct StartupContext {
    pub loader: Arc<Loader>,
    pub lookup_service: Arc<LookupService>,
    pub bulk_service: Arc<BulkLookupService>,
}

/// 准备服务器启动的上下文
///
/// Loads the configured MaxMind database. A failed initial load is fatal:
/// there is nothing valid to serve.
pub async fn prepare_server_startup(config: &StaticConfig) -> Result<StartupContext> {
    prepare_with_opener(config, Arc::new(MaxMindOpener)).await
}

/// Same as [`prepare_server_startup`] with an explicit database opener
pub async fn prepare_with_opener(
    config: &StaticConfig,
    opener: Arc<dyn DatabaseOpener>,
) -> Result<StartupContext> {
    let start_time = std::time::Instant::now();
    debug!("Starting pre-startup processing...");

    let handle = Arc::new(DatabaseHandle::new());
    let loader = Arc::new(Loader::new(
        Arc::clone(&handle),
        opener,
        &config.geoip.database_path,
    ));

    loader.reload().await.with_context(|| {
        format!(
            "Failed to load GeoIP database at {}",
            config.geoip.database_path
        )
    })?;

    let lookup_service = LookupService::new(handle);
    let bulk_service = BulkLookupService::new(lookup_service.clone(), config.geoip.max_bulk_ips);

    info!(
        "Pre-startup processing completed in {} ms",
        start_time.elapsed().as_millis()
    );

    Ok(StartupContext {
        loader,
        lookup_service: Arc::new(lookup_service),
        bulk_service: Arc::new(bulk_service),
    })
}

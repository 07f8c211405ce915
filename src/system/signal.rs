//! Signal-driven reload
//!
//! On Unix, `SIGHUP` reloads the GeoIP database from the configured path,
//! the same as `POST /reload-geoip`.

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::database::Loader;

#[cfg(unix)]
pub fn spawn_reload_listener(loader: Arc<Loader>) -> JoinHandle<()> {
    use tokio::signal::unix::{SignalKind, signal};
    use tracing::{info, warn};

    tokio::spawn(async move {
        let mut hangup = match signal(SignalKind::hangup()) {
            Ok(stream) => stream,
            Err(e) => {
                warn!("Failed to register SIGHUP handler: {}. Signal reload disabled.", e);
                return;
            }
        };

        while hangup.recv().await.is_some() {
            info!("SIGHUP received, reloading GeoIP database");
            // Loader logs the failure and keeps the current snapshot
            let _ = loader.reload().await;
        }
    })
}

#[cfg(not(unix))]
pub fn spawn_reload_listener(_loader: Arc<Loader>) -> JoinHandle<()> {
    tracing::debug!("Signal reload is not supported on this platform");
    tokio::spawn(async {})
}

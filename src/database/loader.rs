//! Database loading and hot reload
//!
//! A load reads the whole file, parses it into a new snapshot and only then
//! publishes it. Any failure leaves the serving snapshot untouched.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use super::handle::DatabaseHandle;
use super::provider::DatabaseOpener;
use super::snapshot::DatabaseSnapshot;
use crate::errors::{GeoIpError, Result};

/// Result of one load attempt
#[derive(Debug, Clone, Serialize)]
pub struct ReloadResult {
    pub success: bool,
    /// Error message if failed
    pub message: Option<String>,
    pub source: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub duration_ms: u64,
}

impl ReloadResult {
    fn finish(source: &Path, started_at: DateTime<Utc>, message: Option<String>) -> Self {
        let finished_at = Utc::now();
        let duration_ms = (finished_at - started_at).num_milliseconds().max(0) as u64;
        Self {
            success: message.is_none(),
            message,
            source: source.display().to_string(),
            started_at,
            finished_at,
            duration_ms,
        }
    }
}

/// Current status of the loader
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReloadStatus {
    pub is_reloading: bool,
    pub last_reload: Option<ReloadResult>,
}

/// Marks a load in progress; the status is settled on every exit path
struct ReloadAttempt<'a> {
    status: &'a RwLock<ReloadStatus>,
    source: &'a Path,
    started_at: DateTime<Utc>,
    finished: bool,
}

impl<'a> ReloadAttempt<'a> {
    fn begin(status: &'a RwLock<ReloadStatus>, source: &'a Path) -> Self {
        status.write().is_reloading = true;
        Self {
            status,
            source,
            started_at: Utc::now(),
            finished: false,
        }
    }

    fn finish(&mut self, error: Option<String>) {
        let mut status = self.status.write();
        status.is_reloading = false;
        status.last_reload = Some(ReloadResult::finish(self.source, self.started_at, error));
        self.finished = true;
    }
}

impl Drop for ReloadAttempt<'_> {
    fn drop(&mut self) {
        if !self.finished {
            warn!("GeoIP database load from {} was cancelled", self.source.display());
            self.finish(Some(RELOAD_CANCELLED_MESSAGE.to_string()));
        }
    }
}

/// Recorded when a load is dropped before it completes
pub const RELOAD_CANCELLED_MESSAGE: &str = "Reload cancelled before completion";

pub struct Loader {
    handle: Arc<DatabaseHandle>,
    opener: Arc<dyn DatabaseOpener>,
    path: PathBuf,
    /// Serializes loads so overlapping reloads don't parse twice
    reload_lock: Mutex<()>,
    status: RwLock<ReloadStatus>,
}

impl Loader {
    /// `path` is the configured database file reused by every `reload`
    pub fn new(
        handle: Arc<DatabaseHandle>,
        opener: Arc<dyn DatabaseOpener>,
        path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            handle,
            opener,
            path: path.into(),
            reload_lock: Mutex::new(()),
            status: RwLock::new(ReloadStatus::default()),
        }
    }

    pub fn handle(&self) -> &Arc<DatabaseHandle> {
        &self.handle
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn status(&self) -> ReloadStatus {
        self.status.read().clone()
    }

    /// Reload from the configured path
    pub async fn reload(&self) -> Result<Arc<DatabaseSnapshot>> {
        self.load(&self.path).await
    }

    /// Load `path` and publish it as the current snapshot
    ///
    /// Cancellation safe: if the future is dropped before the swap, the
    /// serving snapshot is untouched and the attempt is recorded as failed.
    pub async fn load(&self, path: &Path) -> Result<Arc<DatabaseSnapshot>> {
        let _lock = self.reload_lock.lock().await;
        let mut attempt = ReloadAttempt::begin(&self.status, path);

        let result = self.load_snapshot(path).await;

        match &result {
            Ok(snapshot) => {
                info!(
                    "GeoIP database loaded successfully from {} ({}, build {}) at {}",
                    path.display(),
                    snapshot.info().database_type,
                    snapshot.info().build_epoch,
                    snapshot.loaded_at().to_rfc3339()
                );
                attempt.finish(None);
            }
            Err(e) => {
                error!("Failed to load GeoIP database from {}: {}", path.display(), e);
                attempt.finish(Some(e.to_string()));
            }
        }

        result
    }

    async fn load_snapshot(&self, path: &Path) -> Result<Arc<DatabaseSnapshot>> {
        debug!("Reading GeoIP database from {}", path.display());
        let bytes = tokio::fs::read(path).await.map_err(|e| {
            GeoIpError::file_operation(format!("Failed to read {}: {}", path.display(), e))
        })?;

        debug!(
            "Parsing {} bytes with {} opener",
            bytes.len(),
            self.opener.name()
        );
        let opener = Arc::clone(&self.opener);
        let database = tokio::task::spawn_blocking(move || opener.open(bytes))
            .await
            .map_err(|e| GeoIpError::database_parse(format!("Parser task failed: {}", e)))??;

        let snapshot = Arc::new(DatabaseSnapshot::new(database, path));
        self.handle.swap(Arc::clone(&snapshot));
        Ok(snapshot)
    }
}

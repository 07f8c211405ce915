use std::fmt;
use std::net::IpAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::provider::{DatabaseInfo, GeoDatabase};
use super::record::LocationRecord;
use crate::errors::Result;

/// One fully parsed database, never mutated after construction
pub struct DatabaseSnapshot {
    database: Arc<dyn GeoDatabase>,
    info: DatabaseInfo,
    source: PathBuf,
    loaded_at: DateTime<Utc>,
}

impl DatabaseSnapshot {
    pub fn new(database: Arc<dyn GeoDatabase>, source: impl Into<PathBuf>) -> Self {
        let info = database.info();
        Self {
            database,
            info,
            source: source.into(),
            loaded_at: Utc::now(),
        }
    }

    pub fn lookup(&self, ip: IpAddr) -> Result<Option<LocationRecord>> {
        self.database.lookup(ip)
    }

    pub fn info(&self) -> &DatabaseInfo {
        &self.info
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn summary(&self) -> SnapshotSummary {
        SnapshotSummary {
            source: self.source.display().to_string(),
            loaded_at: self.loaded_at().to_rfc3339(),
            database_type: self.info.database_type.clone(),
            build_epoch: self.info.build_epoch,
            ip_version: self.info.ip_version,
        }
    }
}

impl fmt::Debug for DatabaseSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseSnapshot")
            .field("info", &self.info)
            .field("source", &self.source)
            .field("loaded_at", &self.loaded_at)
            .finish_non_exhaustive()
    }
}

/// Serializable description of a snapshot (health endpoint, logs)
#[derive(Debug, Clone, Serialize)]
pub struct SnapshotSummary {
    pub source: String,
    pub loaded_at: String,
    pub database_type: String,
    pub build_epoch: u64,
    pub ip_version: u16,
}

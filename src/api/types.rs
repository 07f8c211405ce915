//! Request and response bodies

use serde::{Deserialize, Serialize};

use crate::database::{LocationRecord, ReloadStatus, SnapshotSummary};

#[derive(Debug, Deserialize)]
pub struct LookupQuery {
    pub ip: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Body of `POST /reload-geoip`
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    pub message: String,
}

/// One entry of a bulk response
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BulkEntry {
    Data { data: LocationRecord },
    Error { error: String },
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub uptime: u64,
    pub database: Option<SnapshotSummary>,
    pub reload: ReloadStatus,
    pub response_time_ms: u32,
}

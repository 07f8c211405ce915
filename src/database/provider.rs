//! GeoIP database abstraction
//!
//! The binary format is parsed by an external library; everything above this
//! seam only sees `GeoDatabase` and `DatabaseOpener`.

use std::net::IpAddr;
use std::sync::Arc;

use serde::Serialize;

use super::record::LocationRecord;
use crate::errors::Result;

/// Metadata read from a parsed database
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DatabaseInfo {
    /// e.g. "GeoLite2-City"
    pub database_type: String,
    /// Unix timestamp of the database build
    pub build_epoch: u64,
    pub ip_version: u16,
    pub node_count: u32,
}

/// A fully parsed, immutable geolocation database
pub trait GeoDatabase: Send + Sync {
    /// Look up one address
    ///
    /// - `Ok(Some(_))`: the database has a record
    /// - `Ok(None)`: well-formed address without data
    /// - `Err(InvalidAddress)`: the database cannot answer for this address
    fn lookup(&self, ip: IpAddr) -> Result<Option<LocationRecord>>;

    fn info(&self) -> DatabaseInfo;
}

/// Parses raw database bytes into a `GeoDatabase`
pub trait DatabaseOpener: Send + Sync {
    fn open(&self, bytes: Vec<u8>) -> Result<Arc<dyn GeoDatabase>>;

    /// 获取 opener 名称（用于日志）
    fn name(&self) -> &'static str;
}

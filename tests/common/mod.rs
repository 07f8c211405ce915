//! Shared fixtures for integration tests
//!
//! `FixtureOpener` parses a small JSON document instead of MMDB bytes, so the
//! real loader path (read file → parse → swap) runs without a MaxMind file.

#![allow(dead_code)]

use std::collections::{BTreeMap, HashMap};
use std::net::IpAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use geoip_server::database::{
    DatabaseHandle, DatabaseInfo, DatabaseOpener, DatabaseSnapshot, GeoDatabase, Loader,
    LocationRecord, Subdivision,
};
use geoip_server::errors::{GeoIpError, Result};
use geoip_server::services::{BulkLookupService, LookupService};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureFile {
    pub database_type: String,
    #[serde(default)]
    pub build_epoch: u64,
    #[serde(default)]
    pub ipv4_only: bool,
    pub records: HashMap<String, LocationRecord>,
}

pub struct FixtureDatabase {
    info: DatabaseInfo,
    ipv4_only: bool,
    records: HashMap<IpAddr, LocationRecord>,
}

impl FixtureDatabase {
    pub fn from_file(file: FixtureFile) -> Result<Self> {
        let mut records = HashMap::new();
        for (ip, record) in file.records {
            let ip: IpAddr = ip
                .parse()
                .map_err(|_| GeoIpError::database_parse(format!("bad fixture key {}", ip)))?;
            records.insert(ip, record);
        }
        Ok(Self {
            info: DatabaseInfo {
                database_type: file.database_type,
                build_epoch: file.build_epoch,
                ip_version: if file.ipv4_only { 4 } else { 6 },
                node_count: records.len() as u32,
            },
            ipv4_only: file.ipv4_only,
            records,
        })
    }
}

impl GeoDatabase for FixtureDatabase {
    fn lookup(&self, ip: IpAddr) -> Result<Option<LocationRecord>> {
        if self.ipv4_only && ip.is_ipv6() {
            return Err(GeoIpError::invalid_address(format!(
                "cannot look up IPv6 address {} in an IPv4-only database",
                ip
            )));
        }
        Ok(self.records.get(&ip).cloned())
    }

    fn info(&self) -> DatabaseInfo {
        self.info.clone()
    }
}

pub struct FixtureOpener;

impl DatabaseOpener for FixtureOpener {
    fn open(&self, bytes: Vec<u8>) -> Result<Arc<dyn GeoDatabase>> {
        let file: FixtureFile = serde_json::from_slice(&bytes)
            .map_err(|e| GeoIpError::database_parse(e.to_string()))?;
        Ok(Arc::new(FixtureDatabase::from_file(file)?))
    }

    fn name(&self) -> &'static str {
        "Fixture"
    }
}

pub fn google_dns() -> LocationRecord {
    LocationRecord {
        city: Some("Mountain View".to_string()),
        country: Some("United States".to_string()),
        country_iso: Some("US".to_string()),
        latitude: Some(37.386),
        longitude: Some(-122.0838),
        timezone: Some("America/Los_Angeles".to_string()),
        subdivisions: Some(vec![Subdivision {
            geoname_id: Some(5332921),
            iso_code: Some("CA".to_string()),
            name: Some("California".to_string()),
            names: Some(BTreeMap::from([
                ("en".to_string(), "California".to_string()),
                ("ja".to_string(), "カリフォルニア州".to_string()),
            ])),
        }]),
    }
}

pub fn cloudflare_dns() -> LocationRecord {
    LocationRecord {
        country: Some("Australia".to_string()),
        country_iso: Some("AU".to_string()),
        latitude: Some(-33.494),
        longitude: Some(143.2104),
        timezone: Some("Australia/Sydney".to_string()),
        ..Default::default()
    }
}

pub fn ipv6_record() -> LocationRecord {
    LocationRecord {
        city: Some("Frankfurt am Main".to_string()),
        country: Some("Germany".to_string()),
        country_iso: Some("DE".to_string()),
        subdivisions: Some(vec![Subdivision {
            geoname_id: Some(2905330),
            iso_code: Some("HE".to_string()),
            name: Some("Hesse".to_string()),
            names: Some(BTreeMap::from([
                ("de".to_string(), "Hessen".to_string()),
                ("en".to_string(), "Hesse".to_string()),
            ])),
        }]),
        ..Default::default()
    }
}

/// 8.8.8.8, 1.1.1.1 and 2a00:1450:4001::1
pub fn standard_fixture() -> FixtureFile {
    let mut records = HashMap::new();
    records.insert("8.8.8.8".to_string(), google_dns());
    records.insert("1.1.1.1".to_string(), cloudflare_dns());
    records.insert("2a00:1450:4001::1".to_string(), ipv6_record());
    FixtureFile {
        database_type: "Test-City".to_string(),
        build_epoch: 1_700_000_000,
        ipv4_only: false,
        records,
    }
}

/// A fixture where 8.8.8.8 resolves to `city` in country `iso`
pub fn labelled_fixture(city: &str, iso: &str) -> FixtureFile {
    let mut records = HashMap::new();
    records.insert(
        "8.8.8.8".to_string(),
        LocationRecord {
            city: Some(city.to_string()),
            country_iso: Some(iso.to_string()),
            ..Default::default()
        },
    );
    FixtureFile {
        database_type: format!("Test-{}", city),
        build_epoch: 0,
        ipv4_only: false,
        records,
    }
}

/// Address `i` of the 10.0.0.0/16 block used by block fixtures
pub fn block_address(i: usize) -> String {
    format!("10.0.{}.{}", i / 256, i % 256)
}

/// A fixture where the first `count` block addresses all resolve to `city`
pub fn labelled_block_fixture(city: &str, iso: &str, count: usize) -> FixtureFile {
    let mut fixture = labelled_fixture(city, iso);
    let record = fixture.records["8.8.8.8"].clone();
    for i in 0..count {
        fixture.records.insert(block_address(i), record.clone());
    }
    fixture
}

pub fn write_fixture(dir: &Path, name: &str, fixture: &FixtureFile) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, serde_json::to_vec(fixture).unwrap()).unwrap();
    path
}

pub fn snapshot_of(fixture: FixtureFile, source: &str) -> DatabaseSnapshot {
    DatabaseSnapshot::new(Arc::new(FixtureDatabase::from_file(fixture).unwrap()), source)
}

pub fn fixture_loader(path: &Path) -> Arc<Loader> {
    Arc::new(Loader::new(
        Arc::new(DatabaseHandle::new()),
        Arc::new(FixtureOpener),
        path,
    ))
}

pub fn services_for(loader: &Loader, max_bulk_ips: usize) -> (LookupService, BulkLookupService) {
    let lookup = LookupService::new(Arc::clone(loader.handle()));
    let bulk = BulkLookupService::new(lookup.clone(), max_bulk_ips);
    (lookup, bulk)
}

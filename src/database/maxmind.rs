//! MaxMind GeoLite2 / GeoIP2 City 数据库实现
//!
//! Parsing and record decoding are delegated to `maxminddb`.

use std::collections::BTreeMap;
use std::net::IpAddr;
use std::sync::Arc;

use maxminddb::{Reader, geoip2};
use tracing::trace;

use super::provider::{DatabaseInfo, DatabaseOpener, GeoDatabase};
use super::record::{LocationRecord, Subdivision};
use crate::errors::{GeoIpError, Result};

/// A MaxMind database held fully in memory
pub struct MaxMindDatabase {
    reader: Reader<Vec<u8>>,
}

impl MaxMindDatabase {
    /// Parse MMDB bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        let reader = Reader::from_source(bytes)?;
        Ok(Self { reader })
    }
}

impl GeoDatabase for MaxMindDatabase {
    fn lookup(&self, ip: IpAddr) -> Result<Option<LocationRecord>> {
        // maxminddb 0.27: lookup() 返回 LookupResult，decode() 在无数据时返回 Ok(None)
        let result = self
            .reader
            .lookup(ip)
            .map_err(|e| GeoIpError::invalid_address(e.to_string()))?;

        let city: Option<geoip2::City> = result
            .decode()
            .map_err(|e| GeoIpError::invalid_address(e.to_string()))?;

        let record = city.as_ref().map(location_from_city);
        trace!("MaxMind lookup for {}: {:?}", ip, record);
        Ok(record)
    }

    fn info(&self) -> DatabaseInfo {
        let metadata = &self.reader.metadata;
        DatabaseInfo {
            database_type: metadata.database_type.clone(),
            build_epoch: metadata.build_epoch,
            ip_version: metadata.ip_version,
            node_count: metadata.node_count,
        }
    }
}

/// Map a decoded City record, keeping only the fields it actually has
fn location_from_city(city: &geoip2::City<'_>) -> LocationRecord {
    let subdivisions: Vec<Subdivision> = city
        .subdivisions
        .iter()
        .map(|s| Subdivision {
            geoname_id: s.geoname_id,
            iso_code: s.iso_code.map(String::from),
            name: s.names.english.map(String::from),
            names: localized_names(&s.names),
        })
        .collect();

    LocationRecord {
        city: city.city.names.english.map(String::from),
        country: city.country.names.english.map(String::from),
        country_iso: city.country.iso_code.map(String::from),
        latitude: city.location.latitude,
        longitude: city.location.longitude,
        timezone: city.location.time_zone.map(String::from),
        subdivisions: (!subdivisions.is_empty()).then_some(subdivisions),
    }
}

/// Locale code → name, `None` when the record has no names at all
fn localized_names(names: &geoip2::Names<'_>) -> Option<BTreeMap<String, String>> {
    let map: BTreeMap<String, String> = [
        ("de", names.german),
        ("en", names.english),
        ("es", names.spanish),
        ("fr", names.french),
        ("ja", names.japanese),
        ("pt-BR", names.brazilian_portuguese),
        ("ru", names.russian),
        ("zh-CN", names.simplified_chinese),
    ]
    .into_iter()
    .filter_map(|(locale, name)| name.map(|n| (locale.to_string(), n.to_string())))
    .collect();

    (!map.is_empty()).then_some(map)
}

/// Opens MMDB files
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxMindOpener;

impl DatabaseOpener for MaxMindOpener {
    fn open(&self, bytes: Vec<u8>) -> Result<Arc<dyn GeoDatabase>> {
        Ok(Arc::new(MaxMindDatabase::from_bytes(bytes)?))
    }

    fn name(&self) -> &'static str {
        "MaxMind"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_bytes_are_a_parse_error() {
        let result = MaxMindOpener.open(b"definitely not an mmdb file".to_vec());
        match result {
            Err(GeoIpError::DatabaseParse(_)) => {}
            Err(other) => panic!("expected DatabaseParse, got {:?}", other),
            Ok(_) => panic!("garbage bytes must not parse"),
        }
    }

    #[test]
    fn test_city_mapping_keeps_subdivision_details() {
        let mut city = geoip2::City::default();
        city.city.names.english = Some("Frankfurt am Main");
        city.country.iso_code = Some("DE");
        city.subdivisions.push(geoip2::city::Subdivision {
            geoname_id: Some(2905330),
            iso_code: Some("HE"),
            names: geoip2::Names {
                english: Some("Hesse"),
                german: Some("Hessen"),
                ..Default::default()
            },
        });
        city.subdivisions.push(geoip2::city::Subdivision {
            iso_code: Some("DA"),
            ..Default::default()
        });

        let record = location_from_city(&city);
        assert_eq!(record.city.as_deref(), Some("Frankfurt am Main"));
        assert!(record.country.is_none());
        assert!(record.latitude.is_none());

        let subdivisions = record.subdivisions.unwrap();
        assert_eq!(subdivisions.len(), 2);
        assert_eq!(subdivisions[0].geoname_id, Some(2905330));
        assert_eq!(subdivisions[0].name.as_deref(), Some("Hesse"));
        let names = subdivisions[0].names.as_ref().unwrap();
        assert_eq!(names.get("de").map(String::as_str), Some("Hessen"));
        assert_eq!(names.get("en").map(String::as_str), Some("Hesse"));
        assert_eq!(names.len(), 2);

        assert_eq!(subdivisions[1].iso_code.as_deref(), Some("DA"));
        assert!(subdivisions[1].geoname_id.is_none());
        assert!(subdivisions[1].names.is_none());
    }

    #[test]
    fn test_city_without_subdivisions() {
        let city = geoip2::City::default();
        assert_eq!(location_from_city(&city), LocationRecord::default());
    }

    #[test]
    fn test_empty_bytes_are_a_parse_error() {
        assert!(matches!(
            MaxMindDatabase::from_bytes(Vec::new()),
            Err(GeoIpError::DatabaseParse(_))
        ));
    }
}

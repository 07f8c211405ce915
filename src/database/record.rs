use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Normalized location for one address
///
/// Every field is independently optional; a field is present only if the
/// database record carried it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// ISO 3166-1 alpha-2 国家代码 (e.g., "CN", "US")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_iso: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    /// IANA time zone, e.g. "America/Chicago"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    /// Ordered from largest to smallest region
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subdivisions: Option<Vec<Subdivision>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subdivision {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geoname_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iso_code: Option<String>,
    /// English name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Localized names keyed by locale code ("en", "de", "zh-CN", ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub names: Option<BTreeMap<String, String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_fields_are_omitted() {
        let record = LocationRecord {
            country: Some("United States".to_string()),
            country_iso: Some("US".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"country": "United States", "countryIso": "US"})
        );
    }

    #[test]
    fn test_full_record_uses_camel_case() {
        let record = LocationRecord {
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
                    ("zh-CN".to_string(), "加利福尼亚州".to_string()),
                ])),
            }]),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["countryIso"], "US");
        assert_eq!(json["timezone"], "America/Los_Angeles");
        assert_eq!(json["subdivisions"][0]["isoCode"], "CA");
        assert_eq!(json["subdivisions"][0]["name"], "California");
        assert_eq!(json["subdivisions"][0]["geonameId"], 5332921);
        assert_eq!(json["subdivisions"][0]["names"]["en"], "California");
        assert_eq!(json["subdivisions"][0]["names"]["zh-CN"], "加利福尼亚州");

        let back: LocationRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_subdivision_fields_are_independent() {
        let subdivision = Subdivision {
            geoname_id: Some(2905330),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&subdivision).unwrap(),
            serde_json::json!({"geonameId": 2905330})
        );
    }
}

use crate::database::LocationRecord;
use crate::errors::GeoIpError;

/// Tagged result of one lookup attempt
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    Found(LocationRecord),
    /// Well-formed address without data
    NotFound,
    /// Malformed input, or an address the database cannot answer for
    Invalid(String),
    /// No database loaded yet
    Unavailable,
}

impl LookupOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, LookupOutcome::Found(_))
    }

    pub fn record(&self) -> Option<&LocationRecord> {
        match self {
            LookupOutcome::Found(record) => Some(record),
            _ => None,
        }
    }

    /// Convert to a `Result`, describing the failure for `ip`
    pub fn into_result(self, ip: &str) -> Result<LocationRecord, GeoIpError> {
        match self {
            LookupOutcome::Found(record) => Ok(record),
            LookupOutcome::NotFound => Err(GeoIpError::address_not_found(format!(
                "The address {} is not in the database.",
                ip
            ))),
            LookupOutcome::Invalid(reason) => Err(GeoIpError::invalid_address(format!(
                "Invalid IP address '{}': {}",
                ip, reason
            ))),
            LookupOutcome::Unavailable => Err(GeoIpError::database_not_loaded(
                "GeoIP database is not loaded",
            )),
        }
    }
}

pub mod geoip;

pub use geoip::{BulkLookupService, LookupOutcome, LookupService};

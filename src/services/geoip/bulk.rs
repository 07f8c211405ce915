use std::collections::BTreeMap;

use tracing::debug;

use super::lookup::LookupService;
use super::outcome::LookupOutcome;
use crate::errors::{GeoIpError, Result};

/// 批量查询最大条目数
pub const DEFAULT_MAX_BULK_IPS: usize = 1000;

/// Batch lookups with per-entry isolation
#[derive(Clone)]
pub struct BulkLookupService {
    lookup: LookupService,
    max_ips: usize,
}

impl BulkLookupService {
    pub fn new(lookup: LookupService, max_ips: usize) -> Self {
        Self { lookup, max_ips }
    }

    pub fn max_ips(&self) -> usize {
        self.max_ips
    }

    /// Look up every address, keyed by the literal input string
    ///
    /// More than `max_ips` inputs is rejected before any lookup runs. The
    /// whole batch is answered from one snapshot; duplicates collapse into a
    /// single entry.
    pub fn lookup_many<S: AsRef<str>>(&self, ips: &[S]) -> Result<BTreeMap<String, LookupOutcome>> {
        if ips.len() > self.max_ips {
            return Err(GeoIpError::validation(format!(
                "Too many IPs provided. Maximum allowed is {}",
                self.max_ips
            )));
        }

        let snapshot = self.lookup.handle().get();
        let mut results = BTreeMap::new();

        for ip in ips {
            let ip = ip.as_ref();
            if results.contains_key(ip) {
                continue;
            }
            let outcome = LookupService::lookup_in(snapshot.as_deref(), ip);
            results.insert(ip.to_string(), outcome);
        }

        debug!(
            "Bulk lookup: {} inputs, {} unique, {} found",
            ips.len(),
            results.len(),
            results.values().filter(|o| o.is_found()).count()
        );

        Ok(results)
    }
}

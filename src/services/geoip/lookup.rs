use std::net::IpAddr;
use std::sync::Arc;

use tracing::trace;

use super::outcome::LookupOutcome;
use crate::database::{DatabaseHandle, DatabaseSnapshot};

/// Reason reported for input that does not parse as an IP address
pub const MALFORMED_ADDRESS: &str = "malformed address";

/// Single-address lookups against the current snapshot
///
/// Read-only; clones share the same handle.
#[derive(Clone)]
pub struct LookupService {
    handle: Arc<DatabaseHandle>,
}

impl LookupService {
    pub fn new(handle: Arc<DatabaseHandle>) -> Self {
        Self { handle }
    }

    pub fn handle(&self) -> &Arc<DatabaseHandle> {
        &self.handle
    }

    pub fn lookup(&self, ip: &str) -> LookupOutcome {
        Self::lookup_in(self.handle.get().as_deref(), ip)
    }

    /// Lookup against an explicit snapshot (`None`: nothing loaded)
    ///
    /// Input is validated before the snapshot is consulted, so a malformed
    /// address is `Invalid` even when no database is loaded.
    pub fn lookup_in(snapshot: Option<&DatabaseSnapshot>, ip: &str) -> LookupOutcome {
        let Ok(addr) = ip.parse::<IpAddr>() else {
            trace!("Rejecting malformed address {:?}", ip);
            return LookupOutcome::Invalid(MALFORMED_ADDRESS.to_string());
        };

        let Some(snapshot) = snapshot else {
            return LookupOutcome::Unavailable;
        };

        match snapshot.lookup(addr) {
            Ok(Some(record)) => LookupOutcome::Found(record),
            Ok(None) => LookupOutcome::NotFound,
            Err(e) => LookupOutcome::Invalid(e.message().to_string()),
        }
    }
}

//! GeoIP database access
//!
//! Owns the loaded database and its hot-reload lifecycle:
//! - `GeoDatabase` / `DatabaseOpener`: parsed database and the parser seam
//! - `MaxMindOpener`: MaxMind MMDB implementation (`maxminddb`)
//! - `DatabaseSnapshot`: one immutable parsed database plus metadata
//! - `DatabaseHandle`: the current snapshot, swapped atomically
//! - `Loader`: file read → parse → publish, never touching a live snapshot

mod handle;
mod loader;
mod maxmind;
mod provider;
mod record;
mod snapshot;

pub use handle::DatabaseHandle;
pub use loader::{Loader, RELOAD_CANCELLED_MESSAGE, ReloadResult, ReloadStatus};
pub use maxmind::{MaxMindDatabase, MaxMindOpener};
pub use provider::{DatabaseInfo, DatabaseOpener, GeoDatabase};
pub use record::{LocationRecord, Subdivision};
pub use snapshot::{DatabaseSnapshot, SnapshotSummary};

//! GeoIP 查询服务
//!
//! - `LookupService`: one address against the current snapshot
//! - `BulkLookupService`: many addresses with per-entry isolation

mod bulk;
mod lookup;
mod outcome;

pub use bulk::{BulkLookupService, DEFAULT_MAX_BULK_IPS};
pub use lookup::{LookupService, MALFORMED_ADDRESS};
pub use outcome::LookupOutcome;

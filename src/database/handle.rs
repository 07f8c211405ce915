//! The currently published database snapshot
//!
//! Readers load the pointer without locking; a reload builds the new snapshot
//! off to the side and publishes it with a single atomic store. Snapshots a
//! reader already holds stay valid until the last `Arc` is dropped.

use std::sync::Arc;

use arc_swap::ArcSwapOption;

use super::snapshot::DatabaseSnapshot;

#[derive(Default)]
pub struct DatabaseHandle {
    current: ArcSwapOption<DatabaseSnapshot>,
}

impl DatabaseHandle {
    /// Empty handle, nothing loaded yet
    pub fn new() -> Self {
        Self {
            current: ArcSwapOption::empty(),
        }
    }

    /// Current snapshot, or `None` before the first successful load
    pub fn get(&self) -> Option<Arc<DatabaseSnapshot>> {
        self.current.load_full()
    }

    /// Publish `snapshot`, returning the one it replaced
    pub fn swap(
        &self,
        snapshot: impl Into<Arc<DatabaseSnapshot>>,
    ) -> Option<Arc<DatabaseSnapshot>> {
        self.current.swap(Some(snapshot.into()))
    }

    pub fn is_loaded(&self) -> bool {
        self.current.load().is_some()
    }
}

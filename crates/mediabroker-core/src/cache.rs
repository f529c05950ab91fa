//! Process-wide cached capability table.

use std::sync::{Arc, OnceLock};

use parking_lot::Mutex;
use tracing::debug;

use mediabroker_types::{CodecType, EncodeSupportSet, ExecutionLocation, SupportTable};

/// Produces the raw capability table.
///
/// Implementations run the platform's codec-support probes. They are
/// expected to be expensive, which is why results are cached.
pub trait SupportProbe: Send + Sync {
    /// Compute the (codec, location) -> support table. `force_refresh`
    /// asks the prober to bypass any caching of its own.
    fn probe(&self, force_refresh: bool) -> SupportTable;
}

/// Lazily-populated capability table with explicit refresh.
///
/// The table is computed at most once until [`SupportCache::invalidate`]
/// or a forced refresh; staleness between refreshes is accepted in
/// exchange for not re-running the probes on every query.
pub struct SupportCache {
    probe: Arc<dyn SupportProbe>,
    table: Mutex<Option<Arc<SupportTable>>>,
}

impl SupportCache {
    /// Creates a cache that fills itself from the given probe.
    pub fn new(probe: Arc<dyn SupportProbe>) -> Self {
        Self {
            probe,
            table: Mutex::new(None),
        }
    }

    /// Returns the cached capability table, computing it first if empty
    /// or if `force_refresh` is set.
    ///
    /// The lock is held across the probe, so callers that arrive while a
    /// recompute is in flight block until the new table is published and
    /// then all observe the same value. A single recompute serves every
    /// waiter; no partial table is ever visible.
    pub fn supported(&self, force_refresh: bool) -> Arc<SupportTable> {
        let mut slot = self.table.lock();

        if !force_refresh {
            if let Some(table) = slot.as_ref() {
                return Arc::clone(table);
            }
        }

        debug!(force_refresh, "probing codec support");
        let table = Arc::new(self.probe.probe(force_refresh));
        *slot = Some(Arc::clone(&table));
        table
    }

    /// Drops the cached table; the next [`SupportCache::supported`] call
    /// repopulates it.
    pub fn invalidate(&self) {
        *self.table.lock() = None;
    }
}

/// Pure lookup into an already-fetched table: support flags for a codec
/// at a location.
///
/// Never triggers recomputation; safe to call off the critical path.
pub fn supports_codec(
    codec: CodecType,
    table: &SupportTable,
    location: ExecutionLocation,
) -> EncodeSupportSet {
    table.support_for(codec, location)
}

static PROCESS_CACHE: OnceLock<SupportCache> = OnceLock::new();

/// Installs the process-wide capability cache.
///
/// The first installation wins; later calls return the already-installed
/// cache and their probe is dropped.
pub fn install_process_cache(probe: Arc<dyn SupportProbe>) -> &'static SupportCache {
    PROCESS_CACHE.get_or_init(|| SupportCache::new(probe))
}

/// The process-wide capability cache, if one has been installed.
pub fn process_cache() -> Option<&'static SupportCache> {
    PROCESS_CACHE.get()
}

use crate::builder::CacheBuilder;
use crate::clock::Clock;
use crate::entry::CacheEntry;
use crate::store::Store;
use crate::task::janitor::Janitor;

use std::sync::Arc;
use std::time::Duration;

/// The state shared between the cache handle and the janitor thread.
pub(crate) struct CacheShared<V> {
  pub(crate) store: Store<V>,
  pub(crate) default_ttl: Duration,
  pub(crate) clock: Arc<dyn Clock>,
}

impl<V> CacheShared<V> {
  /// The current time as nanoseconds since the clock epoch.
  #[inline]
  pub(crate) fn now_nanos(&self) -> u64 {
    self.clock.now().as_nanos() as u64
  }
}

/// A thread-safe key/value cache with per-entry time-based expiry.
///
/// Entries past their TTL read as absent immediately ("lazy expiry"); the
/// background janitor removes them from the underlying map on its next
/// sweep. Values are stored behind an `Arc`, so `V` needs no `Clone` bound
/// and lookups hand back shared ownership of the original payload.
///
/// Construct through [`CacheBuilder`], or [`Cache::with_defaults`] for the
/// common case. When a cleanup interval is configured, call [`Cache::stop`]
/// once at end of life to retire the janitor thread.
pub struct Cache<V> {
  pub(crate) shared: Arc<CacheShared<V>>,
  pub(crate) janitor: Option<Janitor>,
}

impl<V: Send + Sync + 'static> Cache<V> {
  /// Returns a builder with every knob at its default.
  pub fn builder() -> CacheBuilder {
    CacheBuilder::new()
  }

  /// Creates a cache with sensible defaults: the given default TTL, a 30s
  /// cleanup interval, and the system clock. This is probably the version
  /// that you want; see [`CacheBuilder`] for full control.
  pub fn with_defaults(default_ttl: Duration) -> Self {
    CacheBuilder::new().default_ttl(default_ttl).build()
  }

  /// Inserts `value` under `key` with the cache's default TTL.
  ///
  /// An existing entry is fully replaced, including its expiration,
  /// regardless of how much lifetime it had left.
  pub fn insert(&self, key: impl Into<String>, value: V) {
    self.insert_with_ttl(key, value, self.shared.default_ttl);
  }

  /// Inserts `value` under `key` with an explicit TTL.
  ///
  /// A zero `ttl` means the entry never expires. Otherwise the expiration
  /// instant is fixed now, at call time, and is not recomputed on access.
  pub fn insert_with_ttl(&self, key: impl Into<String>, value: V, ttl: Duration) {
    let entry = CacheEntry::new(value, self.shared.clock.now(), ttl);
    self.shared.store.insert(key.into(), entry);
  }

  /// Inserts `value` under `key` with no expiration.
  pub fn insert_forever(&self, key: impl Into<String>, value: V) {
    self.insert_with_ttl(key, value, Duration::ZERO);
  }

  /// Returns the value under `key`, or `None` if the key is missing or its
  /// entry has expired.
  ///
  /// An expired entry is left in place for the janitor; this read path
  /// never mutates the map. As a consequence [`Cache::len`] may count
  /// entries that `get` reports as absent.
  pub fn get(&self, key: &str) -> Option<Arc<V>> {
    self.shared.store.get(key, self.shared.now_nanos())
  }

  /// Removes `key` unconditionally. Idempotent; silent for missing keys.
  ///
  /// You will usually not need this: overwrite values instead, or let them
  /// expire.
  pub fn remove(&self, key: &str) {
    self.shared.store.remove(key);
  }

  /// The number of physically stored entries.
  ///
  /// This is the raw map size and may exceed the number of live entries:
  /// expired-but-unswept entries still count until the next sweep.
  pub fn len(&self) -> usize {
    self.shared.store.len()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Signals the janitor thread to exit; after it does, no further sweeps
  /// occur. The janitor is not restartable.
  ///
  /// Intended to be called once, by the cache's owner. A no-op when the
  /// cache was built with a zero cleanup interval. Direct operations
  /// remain usable after `stop`; only the background sweeping ends.
  pub fn stop(&self) {
    if let Some(janitor) = &self.janitor {
      janitor.stop();
    }
  }
}

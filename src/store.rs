use crate::entry::CacheEntry;

use std::sync::Arc;

use ahash::{HashMap, HashMapExt};
use parking_lot::RwLock;

/// The shared key/value map, guarded by a single reader/writer lock.
///
/// Lookups take the read lock; every mutation (insert, remove, sweep) takes
/// the write lock. No lock is held across a blocking call.
pub(crate) struct Store<V> {
  map: RwLock<HashMap<String, CacheEntry<V>>>,
}

impl<V> Store<V> {
  pub(crate) fn new() -> Self {
    Self {
      map: RwLock::new(HashMap::new()),
    }
  }

  /// Inserts or fully replaces the entry for `key`, including its expiry.
  pub(crate) fn insert(&self, key: String, entry: CacheEntry<V>) {
    self.map.write().insert(key, entry);
  }

  /// Looks up `key` as of `now_nanos`.
  ///
  /// An entry whose TTL has lapsed reads as absent but is NOT removed here;
  /// physical removal is the sweep's job alone. Because of that, [`len`]
  /// may report more entries than `get` would return.
  ///
  /// [`len`]: Store::len
  pub(crate) fn get(&self, key: &str, now_nanos: u64) -> Option<Arc<V>> {
    let guard = self.map.read();
    let entry = guard.get(key)?;

    if entry.is_expired(now_nanos) {
      log::debug!("entry for key `{key}` found but expired; treating as absent");
      return None;
    }

    Some(entry.value())
  }

  /// Removes `key` unconditionally. A no-op for missing keys.
  pub(crate) fn remove(&self, key: &str) {
    self.map.write().remove(key);
  }

  /// Removes every entry that is expired as of the single `now_nanos`
  /// timestamp, so one pass is atomic with respect to the passage of time.
  pub(crate) fn sweep(&self, now_nanos: u64) {
    let mut guard = self.map.write();
    let before = guard.len();
    guard.retain(|_, entry| !entry.is_expired(now_nanos));

    let removed = before - guard.len();
    if removed > 0 {
      log::debug!("sweep removed {removed} expired entries");
    }
  }

  /// The number of physically stored entries, counting any that are expired
  /// but not yet swept.
  pub(crate) fn len(&self) -> usize {
    self.map.read().len()
  }
}

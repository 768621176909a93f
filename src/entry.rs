use std::sync::Arc;
use std::time::Duration;

/// A container for a value in the cache, holding its expiry metadata.
#[derive(Debug)]
pub(crate) struct CacheEntry<V> {
  /// The user's value, wrapped in an Arc for shared ownership.
  value: Arc<V>,
  /// The expiration timestamp in nanoseconds since the clock epoch.
  /// 0 means the entry never expires.
  expires_at: u64,
}

impl<V> CacheEntry<V> {
  /// Creates a new `CacheEntry` expiring `ttl` after `now`.
  /// A zero `ttl` produces an entry that never expires.
  pub(crate) fn new(value: V, now: Duration, ttl: Duration) -> Self {
    let expires_at = if ttl.is_zero() {
      0
    } else {
      (now + ttl).as_nanos() as u64
    };

    Self {
      value: Arc::new(value),
      expires_at,
    }
  }

  /// Returns a clone of the `Arc` containing the value.
  #[inline]
  pub(crate) fn value(&self) -> Arc<V> {
    self.value.clone()
  }

  /// Whether the entry is expired at `now_nanos`.
  ///
  /// The comparison is strict: an entry is still alive at the exact instant
  /// its TTL elapses.
  #[inline]
  pub(crate) fn is_expired(&self, now_nanos: u64) -> bool {
    self.expires_at != 0 && self.expires_at < now_nanos
  }
}

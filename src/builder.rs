use crate::cache::{Cache, CacheShared};
use crate::clock::{Clock, SystemClock};
use crate::store::Store;
use crate::task::janitor::Janitor;

use core::fmt;
use std::sync::Arc;
use std::time::Duration;

/// The cleanup interval applied when none is configured.
const DEFAULT_CLEANUP_INTERVAL: Duration = Duration::from_secs(30);

/// A builder for creating [`Cache`] instances.
///
/// Defaults: entries never expire (`default_ttl` of zero), a 30 second
/// cleanup interval, and the system clock.
pub struct CacheBuilder {
  default_ttl: Duration,
  cleanup_interval: Duration,
  clock: Arc<dyn Clock>,
}

// Manual Debug implementation, as the clock is a trait object.
impl fmt::Debug for CacheBuilder {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("CacheBuilder")
      .field("default_ttl", &self.default_ttl)
      .field("cleanup_interval", &self.cleanup_interval)
      .finish_non_exhaustive()
  }
}

impl CacheBuilder {
  pub fn new() -> Self {
    Self {
      default_ttl: Duration::ZERO,
      cleanup_interval: DEFAULT_CLEANUP_INTERVAL,
      clock: Arc::new(SystemClock::new()),
    }
  }

  /// Sets the TTL applied by [`Cache::insert`]. Zero means entries inserted
  /// without an explicit TTL never expire.
  pub fn default_ttl(mut self, ttl: Duration) -> Self {
    self.default_ttl = ttl;
    self
  }

  /// Sets how often the janitor sweeps expired entries out of the map.
  /// Zero disables the janitor entirely; expired entries then only ever
  /// read as absent, they are never physically removed.
  pub fn cleanup_interval(mut self, interval: Duration) -> Self {
    self.cleanup_interval = interval;
    self
  }

  /// Injects the time source. Tests substitute a [`MockClock`] here to
  /// control expiry and janitor ticks deterministically.
  ///
  /// [`MockClock`]: crate::clock::MockClock
  pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
    self.clock = clock;
    self
  }

  /// Assembles the cache and, if a non-zero cleanup interval is set, spawns
  /// its janitor thread.
  pub fn build<V: Send + Sync + 'static>(self) -> Cache<V> {
    let shared = Arc::new(CacheShared {
      store: Store::new(),
      default_ttl: self.default_ttl,
      clock: self.clock,
    });

    let janitor = if self.cleanup_interval.is_zero() {
      None
    } else {
      Some(Janitor::spawn(shared.clone(), self.cleanup_interval))
    };

    Cache { shared, janitor }
  }
}

impl Default for CacheBuilder {
  fn default() -> Self {
    Self::new()
  }
}

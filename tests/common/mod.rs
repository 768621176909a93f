#![allow(dead_code)]

use fleeting::{Cache, CacheBuilder, MockClock};

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

pub const DEFAULT_TTL: Duration = Duration::from_secs(1);
pub const CLEANUP_INTERVAL: Duration = Duration::from_secs(2);

// Helper to build a cache on a mock clock: default TTL 1s, sweep every 2s.
pub fn build_test_cache() -> (Cache<&'static str>, Arc<MockClock>) {
  let clock = Arc::new(MockClock::new());
  let cache = CacheBuilder::new()
    .default_ttl(DEFAULT_TTL)
    .cleanup_interval(CLEANUP_INTERVAL)
    .clock(clock.clone())
    .build();
  (cache, clock)
}

/// Polls `condition` for up to two seconds. Janitor effects land on a
/// separate thread, so tests observe them with a bounded wait instead of a
/// fixed sleep.
pub fn eventually(condition: impl Fn() -> bool) -> bool {
  let deadline = Instant::now() + Duration::from_secs(2);
  while Instant::now() < deadline {
    if condition() {
      return true;
    }
    thread::sleep(Duration::from_millis(1));
  }
  condition()
}

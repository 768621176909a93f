//! The time source the cache is built against.
//!
//! The cache only ever asks its injected [`Clock`] for the current time and
//! for recurring tick channels, so tests can substitute a [`MockClock`] and
//! move time forward explicitly instead of sleeping.

use crossbeam_channel::{unbounded, Receiver, Sender};
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::time::{Duration, Instant};

// The single, static reference point for all time calculations in the cache.
// It is initialized lazily on its first use.
static CLOCK_EPOCH: Lazy<Instant> = Lazy::new(Instant::now);

/// A source of "now" and of recurring ticks.
///
/// Implementations must be cheap to query; the cache reads the clock on every
/// insert, every lookup, and once per sweep pass.
pub trait Clock: Send + Sync {
  /// Time elapsed since the clock's epoch.
  fn now(&self) -> Duration;

  /// Returns a channel that receives a tick roughly every `interval`.
  ///
  /// Ticks that are not consumed in time may be dropped; the channel never
  /// buffers more than a bounded backlog for the real clock. `interval` must
  /// be non-zero.
  fn ticker(&self, interval: Duration) -> Receiver<Instant>;
}

/// The wall-clock backed [`Clock`] used outside of tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl SystemClock {
  pub fn new() -> Self {
    SystemClock
  }
}

impl Clock for SystemClock {
  fn now(&self) -> Duration {
    Instant::now().saturating_duration_since(*CLOCK_EPOCH)
  }

  fn ticker(&self, interval: Duration) -> Receiver<Instant> {
    assert!(!interval.is_zero(), "ticker interval must be non-zero");
    crossbeam_channel::tick(interval)
  }
}

/// A manually advanced [`Clock`] for deterministic time-based tests.
///
/// "Now" starts at the epoch and only moves when [`MockClock::advance`] is
/// called. Advancing across one or more ticker intervals delivers every
/// pending tick, in order, before `advance` returns.
pub struct MockClock {
  inner: Mutex<MockState>,
}

struct MockState {
  now: Duration,
  tickers: Vec<MockTicker>,
}

struct MockTicker {
  interval: Duration,
  next_fire: Duration,
  tx: Sender<Instant>,
}

impl MockClock {
  /// Creates a mock clock whose "now" sits at the epoch.
  pub fn new() -> Self {
    Self {
      inner: Mutex::new(MockState {
        now: Duration::ZERO,
        tickers: Vec::new(),
      }),
    }
  }

  /// Moves "now" forward by `step` and fires every ticker whose next
  /// deadline falls inside the new window.
  pub fn advance(&self, step: Duration) {
    let mut state = self.inner.lock();
    state.now += step;
    let now = state.now;

    // Tickers whose receiver has been dropped are pruned here.
    state.tickers.retain_mut(|ticker| {
      while ticker.next_fire <= now {
        let stamp = *CLOCK_EPOCH + ticker.next_fire;
        if ticker.tx.send(stamp).is_err() {
          return false;
        }
        ticker.next_fire += ticker.interval;
      }
      true
    });
  }
}

impl Default for MockClock {
  fn default() -> Self {
    Self::new()
  }
}

impl Clock for MockClock {
  fn now(&self) -> Duration {
    self.inner.lock().now
  }

  fn ticker(&self, interval: Duration) -> Receiver<Instant> {
    assert!(!interval.is_zero(), "ticker interval must be non-zero");

    let (tx, rx) = unbounded();
    let mut state = self.inner.lock();
    let next_fire = state.now + interval;
    state.tickers.push(MockTicker {
      interval,
      next_fire,
      tx,
    });
    rx
  }
}

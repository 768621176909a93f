use fleeting::{Clock, MockClock, SystemClock};

use std::thread;
use std::time::Duration;

const TICK: Duration = Duration::from_millis(100);

#[test]
fn test_mock_now_only_moves_on_advance() {
  let clock = MockClock::new();
  let start = clock.now();

  thread::sleep(Duration::from_millis(5));
  assert_eq!(clock.now(), start, "Real elapsed time must not leak in");

  clock.advance(Duration::from_secs(3));
  assert_eq!(clock.now(), start + Duration::from_secs(3));
}

#[test]
fn test_mock_ticker_fires_once_per_elapsed_interval() {
  let clock = MockClock::new();
  let ticker = clock.ticker(TICK);

  // Not yet at the first deadline.
  clock.advance(Duration::from_millis(99));
  assert!(ticker.try_recv().is_err());

  clock.advance(Duration::from_millis(1));
  assert!(ticker.try_recv().is_ok());
  assert!(ticker.try_recv().is_err(), "Exactly one tick was due");
}

#[test]
fn test_mock_ticker_delivers_every_pending_tick_on_a_large_advance() {
  let clock = MockClock::new();
  let ticker = clock.ticker(TICK);

  // One advance across three and a half intervals: three ticks, in order.
  clock.advance(Duration::from_millis(350));

  let first = ticker.try_recv().expect("first tick");
  let second = ticker.try_recv().expect("second tick");
  let third = ticker.try_recv().expect("third tick");
  assert!(ticker.try_recv().is_err(), "Only three ticks were due");

  assert_eq!(second.duration_since(first), TICK);
  assert_eq!(third.duration_since(second), TICK);

  // The half-consumed interval completes on the next advance.
  clock.advance(Duration::from_millis(50));
  assert!(ticker.try_recv().is_ok());
}

#[test]
fn test_mock_tickers_start_counting_from_their_creation_time() {
  let clock = MockClock::new();
  clock.advance(Duration::from_millis(30));

  let ticker = clock.ticker(TICK);
  clock.advance(Duration::from_millis(99));
  assert!(ticker.try_recv().is_err(), "Deadline is creation + interval");

  clock.advance(Duration::from_millis(1));
  assert!(ticker.try_recv().is_ok());
}

#[test]
fn test_system_clock_now_moves_with_real_time() {
  let clock = SystemClock::new();
  let before = clock.now();
  thread::sleep(Duration::from_millis(5));
  assert!(clock.now() > before);
}

#[test]
fn test_system_clock_ticker_fires_at_real_intervals() {
  let clock = SystemClock::new();
  let ticker = clock.ticker(Duration::from_millis(10));

  ticker
    .recv_timeout(Duration::from_secs(1))
    .expect("tick should arrive within the timeout");
}

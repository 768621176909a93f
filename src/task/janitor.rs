use crate::cache::CacheShared;

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossbeam_channel::{bounded, select, Sender};

/// The background task that periodically sweeps expired entries out of the
/// cache. There is at most one janitor per cache instance.
pub(crate) struct Janitor {
  stop_tx: Sender<()>,
}

impl Janitor {
  /// Spawns the janitor thread.
  ///
  /// The thread blocks on "next tick or stop signal". Each tick runs one
  /// sweep with a single timestamp read from the cache's clock. It exits
  /// permanently on the stop signal, or when either channel disconnects
  /// (the cache or the clock was dropped); it never restarts.
  pub(crate) fn spawn<V: Send + Sync + 'static>(
    shared: Arc<CacheShared<V>>,
    tick_interval: Duration,
  ) -> Self {
    // Rendezvous channel: stop() hands the signal directly to the loop
    // below, like the unbuffered stop channel it models.
    let (stop_tx, stop_rx) = bounded::<()>(0);
    let ticker = shared.clock.ticker(tick_interval);

    thread::spawn(move || {
      loop {
        select! {
          recv(ticker) -> tick => {
            if tick.is_err() {
              // The clock went away; no further ticks will ever arrive.
              break;
            }
            log::debug!("running scheduled sweep");
            shared.store.sweep(shared.now_nanos());
          }
          recv(stop_rx) -> _ => break,
        }
      }
    });

    Self { stop_tx }
  }

  /// Delivers the one-shot stop signal.
  ///
  /// Blocks until the janitor observes it at its next tick-or-stop wait.
  /// Once the janitor has exited, the channel reports disconnection and
  /// further calls return immediately.
  pub(crate) fn stop(&self) {
    let _ = self.stop_tx.send(());
  }
}

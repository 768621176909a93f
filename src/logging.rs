//! Optional process-level logging setup.
//!
//! The cache itself only emits `log::debug!` lines through the `log` facade
//! and works fine with no logger installed. Hosts that want those lines can
//! call [`init_from_env`] once at startup, or install any other `log`
//! backend themselves.

use log::LevelFilter;

/// The environment variable selecting the minimum log level.
const LOG_LEVEL_VAR: &str = "LOG_LEVEL";

/// Installs an `env_logger` backend filtered by the `LOG_LEVEL` environment
/// variable. Recognized values are `DEBUG`, `INFO`, `WARN` and `ERROR`;
/// unset or unrecognized values fall back to `INFO`.
///
/// Safe to call more than once; only the first installation wins.
pub fn init_from_env() {
  let level = level_from(std::env::var(LOG_LEVEL_VAR).ok().as_deref());
  let _ = env_logger::Builder::new().filter_level(level).try_init();
}

fn level_from(raw: Option<&str>) -> LevelFilter {
  match raw {
    Some("DEBUG") => LevelFilter::Debug,
    Some("INFO") => LevelFilter::Info,
    Some("WARN") => LevelFilter::Warn,
    Some("ERROR") => LevelFilter::Error,
    _ => LevelFilter::Info,
  }
}

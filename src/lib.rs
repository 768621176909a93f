//! A small, concurrent, in-process key/value cache with per-entry expiry.
//!
//! # Features
//! - **Per-Entry TTL**: Every insert carries a time-to-live; a zero TTL means
//!   the entry never expires. A cache-wide default TTL covers plain inserts.
//! - **Lazy Expiry + Background Sweep**: Reads treat expired entries as absent
//!   without removing them; a dedicated janitor thread periodically removes
//!   them from the underlying map.
//! - **Injectable Clock**: The cache never reads an ambient clock. Production
//!   code uses [`SystemClock`]; tests drive a [`MockClock`] to simulate the
//!   passage of time deterministically, including janitor ticks.
//! - **Non-Clone Support**: Stores values in an `Arc<V>`, avoiding `V: Clone`
//!   bounds.

// Public modules that form the API
pub mod builder;
pub mod clock;
pub mod logging;

// Internal, crate-only modules
mod cache;
mod entry;
mod store;
mod task;

// Re-export the primary user-facing types for convenience
pub use builder::CacheBuilder;
pub use cache::Cache;
pub use clock::{Clock, MockClock, SystemClock};

//! Caller module - paced, announced number calling on top of a session
//!
//! The session core is synchronous and instant. This crate adds a pause
//! before each number lands and before each ticket batch is delivered,
//! using **tokio** timers. A second draw is never accepted while one is
//! pending.
//!
//! # Serialization
//!
//! [`PacedCaller::call_next`] borrows the caller mutably for the whole
//! delay, so a second call cannot start until the first resolves. The
//! borrow is the caller-side lock; the session itself has none.
//!
//! # Environment Variables
//!
//! [`CallerConfig::from_env`] reads:
//!
//! - `TAMBOLA_TICKETS`: tickets per batch, clamped to 1-12 (default: 1)
//! - `TAMBOLA_SEED`: RNG seed (default: OS entropy)
//! - `TAMBOLA_DRAW_DELAY_MS`: pause before each call lands (default: 1000)
//! - `TAMBOLA_GENERATE_DELAY_MS`: pause before a batch is delivered (default: 500)
//! - `TAMBOLA_COLUMN_POLICY`: `as-drawn` or `cover` (default: `as-drawn`)
//! - `TAMBOLA_MAX_CALLS`: stop a run after this many calls (default: 90)
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use tambola_caller::{CallerConfig, PacedCaller, RecordingAnnouncer};
//! use tambola_core::Session;
//!
//! let config = CallerConfig {
//!     draw_delay: Duration::ZERO,
//!     generate_delay: Duration::ZERO,
//!     ..CallerConfig::default()
//! };
//! let mut caller = PacedCaller::new(Session::new(7), RecordingAnnouncer::default(), &config);
//!
//! tokio_test::block_on(async {
//!     caller.generate(2).await;
//!     let calls = caller.run_to_completion(5).await;
//!     assert_eq!(calls, 5);
//! });
//! assert_eq!(caller.announcer().calls().len(), 5);
//! ```

pub mod announcer;
pub mod config;
pub mod paced;

pub use tambola_core as core;
pub use tambola_types as types;

pub use announcer::{Announcer, LogAnnouncer, RecordingAnnouncer};
pub use config::CallerConfig;
pub use paced::PacedCaller;

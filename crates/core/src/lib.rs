//! Core session logic - pure, seedable, and testable
//!
//! This crate contains ticket generation, number drawing, and the session
//! state machine. It has **no dependencies** on rendering, timers, or I/O:
//!
//! - **Deterministic**: every random choice goes through an injected `rand::Rng`,
//!   so a seeded session replays identically
//! - **Total**: draw requests never panic or error; a refused draw is a
//!   [`DrawOutcome::Declined`](types::DrawOutcome) value
//! - **Portable**: usable from a terminal runner, a GUI, or a test harness
//!
//! # Module Structure
//!
//! - [`ticket`]: the 3 x 9 ticket, its marks, and layout validation
//! - [`generator`]: column-candidate / row-pick ticket generation
//! - [`drawer`]: uniform pick from the uncalled numbers
//! - [`history`]: ordered, duplicate-free call record
//! - [`number_set`]: allocation-free set of numbers in 1-90
//! - [`session`]: start / pause / draw / reset lifecycle
//! - [`snapshot`]: serializable views for renderers and announcers
//!
//! # Example
//!
//! ```
//! use tambola_core::Session;
//!
//! let mut session = Session::new(12345);
//! session.generate_tickets(2);
//! session.start();
//!
//! let outcome = session.draw_next();
//! let number = outcome.number().unwrap();
//!
//! assert_eq!(session.current_number(), Some(number));
//! assert_eq!(session.remaining_count(), 89);
//! assert!(session.tickets().iter().all(|t| t.is_marked(number)));
//! ```

pub mod drawer;
pub mod generator;
pub mod history;
pub mod number_set;
pub mod session;
pub mod snapshot;
pub mod ticket;

pub use tambola_types as types;

// Re-export commonly used types for convenience
pub use generator::{ColumnPolicy, TicketGenerator};
pub use history::{BoardEntry, CallHistory, NumberBoard};
pub use number_set::NumberSet;
pub use session::{Session, SessionPhase};
pub use snapshot::{SessionSnapshot, TicketSnapshot};
pub use ticket::{validate_grid, Grid, Ticket, TicketId, TicketLayoutError};

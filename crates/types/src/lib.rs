//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! Everything here is plain data with no randomness and no I/O, so it can be
//! shared by the session core, the paced caller, and any renderer.
//!
//! # Ticket Layout
//!
//! A Tambola ticket is a 3 x 9 grid:
//!
//! - **Rows**: 3, each carrying exactly 5 numbers
//! - **Columns**: 9, column `c` (0-indexed) owns `10c+1 ..= 10c+10`
//! - **Numbers per ticket**: 15 of the 27 cells are filled
//!
//! # Pacing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DRAW_DELAY_MS` | 1000 | Pause before a draw is committed |
//! | `GENERATE_DELAY_MS` | 500 | Pause before a ticket batch is delivered |
//! | `RECENT_CALLS_LIMIT` | 10 | Calls shown in the "recent numbers" strip |
//!
//! # Examples
//!
//! ```
//! use tambola_types::{column_of, column_range, SessionAction, NUMBER_MAX};
//!
//! assert_eq!(column_range(0), 1..=10);
//! assert_eq!(column_range(8), 81..=90);
//! assert_eq!(column_of(90), Some(8));
//! assert_eq!(column_of(0), None);
//!
//! let action = SessionAction::from_str("draw").unwrap();
//! assert_eq!(action, SessionAction::Draw);
//! assert_eq!(NUMBER_MAX, 90);
//! ```

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// A called number, always within `NUMBER_MIN..=NUMBER_MAX` once it reaches a ticket.
pub type Number = u8;

/// A ticket cell: `None` is an empty cell.
pub type Cell = Option<Number>;

/// Smallest callable number.
pub const NUMBER_MIN: Number = 1;

/// Largest callable number.
pub const NUMBER_MAX: Number = 90;

/// Size of the number universe.
pub const NUMBER_COUNT: usize = NUMBER_MAX as usize;

/// Ticket rows.
pub const TICKET_ROWS: usize = 3;

/// Ticket columns.
pub const TICKET_COLUMNS: usize = 9;

/// Width of a column's number range.
pub const COLUMN_WIDTH: Number = 10;

/// Candidates kept per column before rows are filled.
pub const CANDIDATES_PER_COLUMN: usize = 3;

/// Filled cells per row.
pub const NUMBERS_PER_ROW: usize = 5;

/// Filled cells per ticket.
pub const NUMBERS_PER_TICKET: usize = TICKET_ROWS * NUMBERS_PER_ROW;

/// Fewest tickets a single generation request may ask for.
pub const TICKET_COUNT_MIN: usize = 1;

/// Most tickets a single generation request may ask for.
pub const TICKET_COUNT_MAX: usize = 12;

/// Pause before a draw is committed (announcer pacing).
pub const DRAW_DELAY_MS: u64 = 1000;

/// Pause before a generated batch is delivered.
pub const GENERATE_DELAY_MS: u64 = 500;

/// Number of calls surfaced by the "recent numbers" view.
pub const RECENT_CALLS_LIMIT: usize = 10;

/// Numbers per row of the 1-90 reference board.
pub const BOARD_ROW_WIDTH: usize = 10;

/// The inclusive number range owned by column `column` (0-indexed).
///
/// Columns past the last one are capped at [`NUMBER_MAX`].
pub fn column_range(column: usize) -> RangeInclusive<Number> {
    let lo = (column as Number) * COLUMN_WIDTH + 1;
    let hi = (lo + COLUMN_WIDTH - 1).min(NUMBER_MAX);
    lo..=hi
}

/// The column a number belongs on, or `None` when it is outside `1..=90`.
///
/// ```
/// use tambola_types::column_of;
///
/// assert_eq!(column_of(1), Some(0));
/// assert_eq!(column_of(10), Some(0));
/// assert_eq!(column_of(11), Some(1));
/// assert_eq!(column_of(91), None);
/// ```
pub fn column_of(number: Number) -> Option<usize> {
    if !(NUMBER_MIN..=NUMBER_MAX).contains(&number) {
        return None;
    }
    Some(((number - 1) / COLUMN_WIDTH) as usize)
}

/// Normalize a requested ticket count into `TICKET_COUNT_MIN..=TICKET_COUNT_MAX`.
///
/// This is the collaborator-side clamp applied before asking for a batch;
/// the generator itself trusts its input.
///
/// ```
/// use tambola_types::clamp_ticket_count;
///
/// assert_eq!(clamp_ticket_count(0), 1);
/// assert_eq!(clamp_ticket_count(7), 7);
/// assert_eq!(clamp_ticket_count(40), 12);
/// ```
pub fn clamp_ticket_count(requested: i64) -> usize {
    requested.clamp(TICKET_COUNT_MIN as i64, TICKET_COUNT_MAX as i64) as usize
}

/// Text an announcer speaks for a call.
pub fn announcement(number: Number) -> String {
    format!("Number {number}")
}

/// Actions that drive the session state machine
///
/// Input sources (buttons, timers, scripted runs) map onto these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SessionAction {
    /// Allow draws
    Start,
    /// Disallow draws
    Pause,
    /// Flip between running and paused (the single start/pause control)
    Toggle,
    /// Draw the next number
    Draw,
    /// Clear all calls and marks, keep tickets
    Reset,
}

impl SessionAction {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tambola_types::SessionAction;
    ///
    /// assert_eq!(SessionAction::from_str("Start"), Some(SessionAction::Start));
    /// assert_eq!(SessionAction::from_str("TOGGLE"), Some(SessionAction::Toggle));
    /// assert_eq!(SessionAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "start" => Some(SessionAction::Start),
            "pause" => Some(SessionAction::Pause),
            "toggle" => Some(SessionAction::Toggle),
            "draw" => Some(SessionAction::Draw),
            "reset" => Some(SessionAction::Reset),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SessionAction::Start => "start",
            SessionAction::Pause => "pause",
            SessionAction::Toggle => "toggle",
            SessionAction::Draw => "draw",
            SessionAction::Reset => "reset",
        }
    }
}

/// Why a draw request did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DeclineReason {
    /// The session is paused (or was never started).
    InactiveSession,
    /// All 90 numbers have been called.
    NoNumbersRemaining,
}

impl DeclineReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclineReason::InactiveSession => "inactiveSession",
            DeclineReason::NoNumbersRemaining => "noNumbersRemaining",
        }
    }
}

/// A committed draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Call {
    pub number: Number,
    /// 1-based position in the call history.
    pub order: usize,
    /// Numbers still uncalled after this one.
    pub remaining: usize,
}

/// Result of a draw request.
///
/// A declined draw leaves the session untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "status")]
pub enum DrawOutcome {
    Drawn(Call),
    Declined { reason: DeclineReason },
}

impl DrawOutcome {
    pub fn declined(reason: DeclineReason) -> Self {
        DrawOutcome::Declined { reason }
    }

    pub fn call(&self) -> Option<Call> {
        match self {
            DrawOutcome::Drawn(call) => Some(*call),
            DrawOutcome::Declined { .. } => None,
        }
    }

    pub fn number(&self) -> Option<Number> {
        self.call().map(|c| c.number)
    }

    pub fn is_drawn(&self) -> bool {
        matches!(self, DrawOutcome::Drawn(_))
    }

    pub fn decline_reason(&self) -> Option<DeclineReason> {
        match self {
            DrawOutcome::Drawn(_) => None,
            DrawOutcome::Declined { reason } => Some(*reason),
        }
    }
}

//! Session module - the state machine for one play-through
//!
//! A session owns the live ticket batch and the call history. It moves
//! between three phases:
//!
//! - **Idle**: no tickets, not running
//! - **Ready**: tickets loaded, not running
//! - **Running**: draws are accepted
//!
//! Every transition is a single synchronous step. Pacing (the pause before a
//! draw lands) belongs to the caller, which must not issue a second draw
//! while one is pending.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, info};

use crate::drawer;
use crate::generator::TicketGenerator;
use crate::history::CallHistory;
use crate::snapshot::{SessionSnapshot, TicketSnapshot};
use crate::ticket::Ticket;
use crate::types::{Call, DeclineReason, DrawOutcome, Number, SessionAction, RECENT_CALLS_LIMIT};

/// Coarse lifecycle phase, derived from the session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SessionPhase {
    Idle,
    Ready,
    Running,
}

/// One Tambola session.
#[derive(Debug, Clone)]
pub struct Session<R = StdRng> {
    history: CallHistory,
    tickets: Vec<Ticket>,
    active: bool,
    generator: TicketGenerator,
    rng: R,
}

impl Session<StdRng> {
    /// Create a session with a seeded RNG.
    pub fn new(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), TicketGenerator::default())
    }

    /// Create a session seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_os_rng(), TicketGenerator::default())
    }
}

impl<R: Rng> Session<R> {
    /// Create a session around any random source.
    pub fn with_rng(rng: R, generator: TicketGenerator) -> Self {
        Self {
            history: CallHistory::new(),
            tickets: Vec::new(),
            active: false,
            generator,
            rng,
        }
    }

    pub fn generator(&self) -> &TicketGenerator {
        &self.generator
    }

    /// Generate a fresh batch and load it, replacing the current one.
    pub fn generate_tickets(&mut self, count: usize) -> &[Ticket] {
        let tickets = self.generator.generate(count, &mut self.rng);
        self.load_tickets(tickets);
        &self.tickets
    }

    /// Replace the ticket batch wholesale.
    ///
    /// Calls already made are not applied to the new tickets: a batch loaded
    /// mid-game starts unmarked.
    pub fn load_tickets(&mut self, tickets: Vec<Ticket>) {
        info!(
            count = tickets.len(),
            calls_so_far = self.history.len(),
            "loaded ticket batch"
        );
        self.tickets = tickets;
    }

    /// Allow draws. No-op if already running.
    pub fn start(&mut self) {
        self.active = true;
    }

    /// Disallow draws. No-op if already paused.
    pub fn pause(&mut self) {
        self.active = false;
    }

    /// Flip between running and paused; returns the new active flag.
    pub fn toggle(&mut self) -> bool {
        self.active = !self.active;
        self.active
    }

    /// Draw and commit the next number.
    ///
    /// Declines without touching any state when the session is not running
    /// or every number has been called.
    pub fn draw_next(&mut self) -> DrawOutcome {
        if !self.active {
            debug!("draw declined: session inactive");
            return DrawOutcome::declined(DeclineReason::InactiveSession);
        }

        match drawer::draw_next(&self.history, &mut self.rng) {
            Some(number) => match self.commit(number) {
                Some(call) => DrawOutcome::Drawn(call),
                // The drawer only offers uncalled numbers.
                None => DrawOutcome::declined(DeclineReason::NoNumbersRemaining),
            },
            None => {
                debug!("draw declined: no numbers remaining");
                DrawOutcome::declined(DeclineReason::NoNumbersRemaining)
            }
        }
    }

    /// Re-apply a recorded call sequence, ignoring the active flag.
    ///
    /// Duplicates and out-of-range values are skipped. Returns how many
    /// numbers were committed.
    pub fn replay(&mut self, numbers: &[Number]) -> usize {
        numbers
            .iter()
            .filter(|&&n| self.commit(n).is_some())
            .count()
    }

    /// Clear calls and marks; tickets stay.
    pub fn reset(&mut self) {
        self.history.clear();
        self.active = false;
        for ticket in &mut self.tickets {
            ticket.clear_marks();
        }
        info!(tickets = self.tickets.len(), "session reset");
    }

    /// Apply an action; returns whether anything changed.
    pub fn apply_action(&mut self, action: SessionAction) -> bool {
        match action {
            SessionAction::Start => {
                let changed = !self.active;
                self.start();
                changed
            }
            SessionAction::Pause => {
                let changed = self.active;
                self.pause();
                changed
            }
            SessionAction::Toggle => {
                self.toggle();
                true
            }
            SessionAction::Draw => self.draw_next().is_drawn(),
            SessionAction::Reset => {
                self.reset();
                true
            }
        }
    }

    fn commit(&mut self, number: Number) -> Option<Call> {
        if !self.history.push(number) {
            return None;
        }
        for ticket in &mut self.tickets {
            ticket.mark(number);
        }

        let call = Call {
            number,
            order: self.history.len(),
            remaining: self.history.remaining_count(),
        };
        debug!(
            number = call.number,
            order = call.order,
            remaining = call.remaining,
            "number called"
        );
        Some(call)
    }
}

impl<R> Session<R> {
    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn history(&self) -> &CallHistory {
        &self.history
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn current_number(&self) -> Option<Number> {
        self.history.last()
    }

    pub fn is_drawn(&self, number: Number) -> bool {
        self.history.contains(number)
    }

    pub fn remaining_count(&self) -> usize {
        self.history.remaining_count()
    }

    pub fn is_complete(&self) -> bool {
        self.history.is_complete()
    }

    /// Whether a draw would currently be accepted.
    pub fn can_draw(&self) -> bool {
        self.active && !self.history.is_complete()
    }

    pub fn phase(&self) -> SessionPhase {
        if self.active {
            SessionPhase::Running
        } else if self.tickets.is_empty() {
            SessionPhase::Idle
        } else {
            SessionPhase::Ready
        }
    }

    /// Fill `out` with the current state, reusing its buffers.
    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        out.phase = self.phase();
        out.active = self.active;
        out.current_number = self.current_number();
        out.remaining = self.remaining_count();
        out.progress_percent = self.history.progress_percent();

        out.history.clear();
        out.history.extend_from_slice(self.history.as_slice());

        out.recent.clear();
        out.recent.extend(self.history.recent(RECENT_CALLS_LIMIT));

        out.tickets.clear();
        out.tickets.extend(self.tickets.iter().map(TicketSnapshot::from));
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut s = SessionSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for Session<StdRng> {
    fn default() -> Self {
        Self::new(1)
    }
}

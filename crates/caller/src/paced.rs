//! Paced caller - delays, then commits, then announces

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::time::sleep;
use tracing::{debug, info};

use crate::announcer::{Announcer, LogAnnouncer};
use crate::config::CallerConfig;
use crate::core::{Session, Ticket, TicketGenerator};
use crate::types::DrawOutcome;

/// Drives a session with announcer pacing.
///
/// Every request takes `&mut self` across its delay, so requests are
/// serialized by construction.
#[derive(Debug)]
pub struct PacedCaller<A, R = StdRng> {
    session: Session<R>,
    announcer: A,
    draw_delay: Duration,
    generate_delay: Duration,
}

impl PacedCaller<LogAnnouncer, StdRng> {
    /// Build a logging caller with a fresh session from `config`.
    pub fn from_config(config: &CallerConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let session = Session::with_rng(rng, TicketGenerator::new(config.column_policy));
        Self::new(session, LogAnnouncer, config)
    }
}

impl<A: Announcer, R: Rng> PacedCaller<A, R> {
    pub fn new(session: Session<R>, announcer: A, config: &CallerConfig) -> Self {
        Self {
            session,
            announcer,
            draw_delay: config.draw_delay,
            generate_delay: config.generate_delay,
        }
    }

    /// Wait the generation delay, then replace the ticket batch.
    pub async fn generate(&mut self, count: usize) -> &[Ticket] {
        sleep(self.generate_delay).await;
        self.session.generate_tickets(count)
    }

    /// Wait the draw delay, commit one draw, and announce it.
    ///
    /// A request the session would refuse is answered at once, without the
    /// delay, and leaves the session untouched.
    pub async fn call_next(&mut self) -> DrawOutcome {
        if !self.session.can_draw() {
            return self.session.draw_next();
        }

        sleep(self.draw_delay).await;
        let outcome = self.session.draw_next();
        if let DrawOutcome::Drawn(call) = &outcome {
            self.announcer.announce(call);
        }
        outcome
    }

    /// Start the session and call until declined or `max_calls` land.
    ///
    /// Returns the number of calls made by this run.
    pub async fn run_to_completion(&mut self, max_calls: usize) -> usize {
        self.session.start();
        let mut calls = 0;
        while calls < max_calls {
            let outcome = self.call_next().await;
            if let Some(reason) = outcome.decline_reason() {
                debug!(reason = reason.as_str(), "run stopped");
                break;
            }
            calls += 1;
        }
        info!(
            calls,
            remaining = self.session.remaining_count(),
            "run finished"
        );
        calls
    }

    pub fn session(&self) -> &Session<R> {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session<R> {
        &mut self.session
    }

    pub fn announcer(&self) -> &A {
        &self.announcer
    }

    pub fn into_parts(self) -> (Session<R>, A) {
        (self.session, self.announcer)
    }
}

//! Announcer seam - whoever speaks or shows a call once it lands

use tracing::info;

use crate::types::{announcement, Call};

/// Receives every committed call, in order.
pub trait Announcer {
    fn announce(&mut self, call: &Call);
}

/// Logs each call as its spoken text.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogAnnouncer;

impl Announcer for LogAnnouncer {
    fn announce(&mut self, call: &Call) {
        info!(
            number = call.number,
            order = call.order,
            remaining = call.remaining,
            "{}",
            announcement(call.number)
        );
    }
}

/// Keeps every call it hears.
#[derive(Debug, Clone, Default)]
pub struct RecordingAnnouncer {
    calls: Vec<Call>,
}

impl RecordingAnnouncer {
    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    /// Spoken text for each recorded call.
    pub fn transcript(&self) -> Vec<String> {
        self.calls.iter().map(|c| announcement(c.number)).collect()
    }
}

impl Announcer for RecordingAnnouncer {
    fn announce(&mut self, call: &Call) {
        self.calls.push(*call);
    }
}

impl<A: Announcer + ?Sized> Announcer for &mut A {
    fn announce(&mut self, call: &Call) {
        (**self).announce(call);
    }
}

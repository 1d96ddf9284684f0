use serde::Serialize;

use crate::session::SessionPhase;
use crate::ticket::{Grid, Ticket, TicketId};
use crate::types::{Number, NUMBER_COUNT};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TicketSnapshot {
    pub id: TicketId,
    pub grid: Grid,
    /// Grid numbers already called, ascending.
    pub matched: Vec<Number>,
    /// Every number marked against the ticket, ascending.
    pub marked: Vec<Number>,
}

impl From<&Ticket> for TicketSnapshot {
    fn from(ticket: &Ticket) -> Self {
        let mut matched: Vec<Number> = ticket
            .numbers()
            .filter(|&n| ticket.is_marked(n))
            .collect();
        matched.sort_unstable();

        Self {
            id: ticket.id(),
            grid: *ticket.grid(),
            matched,
            marked: ticket.marked_numbers().iter().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub phase: SessionPhase,
    pub active: bool,
    pub current_number: Option<Number>,
    pub history: Vec<Number>,
    /// Last calls, most recent first.
    pub recent: Vec<Number>,
    pub remaining: usize,
    pub progress_percent: f32,
    pub tickets: Vec<TicketSnapshot>,
}

impl SessionSnapshot {
    pub fn clear(&mut self) {
        self.phase = SessionPhase::Idle;
        self.active = false;
        self.current_number = None;
        self.history.clear();
        self.recent.clear();
        self.remaining = NUMBER_COUNT;
        self.progress_percent = 0.0;
        self.tickets.clear();
    }

    pub fn drawable(&self) -> bool {
        self.active && self.remaining > 0
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self {
            phase: SessionPhase::Idle,
            active: false,
            current_number: None,
            history: Vec::with_capacity(NUMBER_COUNT),
            recent: Vec::new(),
            remaining: NUMBER_COUNT,
            progress_percent: 0.0,
            tickets: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;

    #[test]
    fn test_default_snapshot_matches_fresh_session() {
        let session = Session::new(1);
        assert_eq!(session.snapshot(), SessionSnapshot::default());
    }

    #[test]
    fn test_clear_resets_reused_buffer() {
        let mut session = Session::new(2);
        session.generate_tickets(3);
        session.start();
        session.draw_next();

        let mut snap = SessionSnapshot::default();
        session.snapshot_into(&mut snap);
        assert!(snap.drawable());
        assert_eq!(snap.tickets.len(), 3);

        snap.clear();
        assert_eq!(snap, SessionSnapshot::default());
    }

    #[test]
    fn test_ticket_snapshot_splits_matched_from_marked() {
        let mut session = Session::new(4);
        session.generate_tickets(1);
        session.start();
        for _ in 0..30 {
            session.draw_next();
        }
        let ticket = &session.tickets()[0];
        let snap = TicketSnapshot::from(ticket);
        assert_eq!(snap.marked.len(), 30);
        assert_eq!(snap.matched.len(), ticket.matched_count());
        assert!(snap.matched.iter().all(|&n| ticket.contains(n)));
        assert_eq!(snap.grid.iter().flatten().flatten().count(), 15);
    }

    #[test]
    fn test_snapshot_serializes_camel_case() {
        let mut session = Session::new(6);
        session.start();
        session.draw_next();
        let json = serde_json::to_value(session.snapshot()).unwrap();
        assert_eq!(json["phase"], "running");
        assert_eq!(json["remaining"], 89);
        assert!(json["currentNumber"].is_u64());
    }
}

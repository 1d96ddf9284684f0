//! Call history - the ordered, duplicate-free record of drawn numbers
//!
//! The history is the single source of truth for both the draw order and
//! the drawn set. Membership is a [`NumberSet`] updated only alongside the
//! ordered list, so the two views cannot drift.

use arrayvec::ArrayVec;
use serde::Serialize;

use crate::number_set::NumberSet;
use crate::types::{Number, BOARD_ROW_WIDTH, NUMBER_COUNT, NUMBER_MAX, NUMBER_MIN};

/// Ordered unique sequence of called numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallHistory {
    order: ArrayVec<Number, NUMBER_COUNT>,
    drawn: NumberSet,
}

/// The 1-90 board as 9 rows of 10.
pub type NumberBoard = [[BoardEntry; BOARD_ROW_WIDTH]; NUMBER_COUNT / BOARD_ROW_WIDTH];

/// One cell of the 1-90 reference board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoardEntry {
    pub number: Number,
    pub called: bool,
    /// 1-based call position, when called.
    pub order: Option<usize>,
}

impl CallHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a number. Returns `false` (and records nothing) for duplicates
    /// or values outside `1..=90`.
    pub fn push(&mut self, number: Number) -> bool {
        if !self.drawn.insert(number) {
            return false;
        }
        // Capacity equals the universe size, so a fresh number always fits.
        self.order.push(number);
        true
    }

    pub fn contains(&self, number: Number) -> bool {
        self.drawn.contains(number)
    }

    /// Membership view of the history.
    pub fn drawn(&self) -> &NumberSet {
        &self.drawn
    }

    pub fn as_slice(&self) -> &[Number] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Most recent call.
    pub fn last(&self) -> Option<Number> {
        self.order.last().copied()
    }

    pub fn remaining_count(&self) -> usize {
        NUMBER_COUNT - self.order.len()
    }

    pub fn is_complete(&self) -> bool {
        self.remaining_count() == 0
    }

    /// Uncalled numbers in ascending order.
    pub fn remaining(&self) -> impl Iterator<Item = Number> + '_ {
        (NUMBER_MIN..=NUMBER_MAX).filter(move |&n| !self.contains(n))
    }

    /// The last `limit` calls, most recent first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = Number> + '_ {
        self.order.iter().rev().take(limit).copied()
    }

    /// 1-based position of `number` in the call order.
    pub fn call_order(&self, number: Number) -> Option<usize> {
        if !self.contains(number) {
            return None;
        }
        self.order.iter().position(|&n| n == number).map(|i| i + 1)
    }

    /// Share of the universe already called, in percent.
    pub fn progress_percent(&self) -> f32 {
        self.order.len() as f32 / NUMBER_COUNT as f32 * 100.0
    }

    /// The 1-90 board grouped by tens, with call state for each number.
    pub fn number_board(&self) -> NumberBoard {
        let mut board: NumberBoard = [[BoardEntry {
            number: 0,
            called: false,
            order: None,
        }; BOARD_ROW_WIDTH]; NUMBER_COUNT / BOARD_ROW_WIDTH];

        for (i, row) in board.iter_mut().enumerate() {
            for (j, entry) in row.iter_mut().enumerate() {
                let number = (i * BOARD_ROW_WIDTH + j + 1) as Number;
                *entry = BoardEntry {
                    number,
                    called: self.contains(number),
                    order: self.call_order(number),
                };
            }
        }
        board
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.drawn.clear();
    }
}

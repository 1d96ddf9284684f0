//! Drawer - picks the next number uniformly from the ones not yet called

use arrayvec::ArrayVec;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::history::CallHistory;
use crate::types::{Number, NUMBER_COUNT};

/// Choose one uncalled number, or `None` when all 90 are gone.
///
/// Pure apart from the randomness consumed from `rng`.
pub fn draw_next<R: Rng + ?Sized>(drawn: &CallHistory, rng: &mut R) -> Option<Number> {
    let remaining: ArrayVec<Number, NUMBER_COUNT> = drawn.remaining().collect();
    remaining.choose(rng).copied()
}

//! Ticket generation
//!
//! Each ticket is built in two passes:
//!
//! 1. **Column candidates**: every column shuffles its 10 numbers, keeps 3 and
//!    sorts them, giving a queue already in top-to-bottom order.
//! 2. **Row fill**: every row picks 5 of the 9 columns at random and pops the
//!    front of each picked column's queue into its cell.
//!
//! Popping in ascending order keeps columns sorted without a post-pass, and
//! picking exactly 5 columns per row keeps rows balanced. A queue holds 3
//! candidates and a column can be picked at most once per row, so a pop never
//! finds it empty.
//!
//! # Column coverage
//!
//! With [`ColumnPolicy::AsDrawn`] a column picked by none of the rows stays
//! empty, which most Tambola rule sets forbid. [`ColumnPolicy::CoverEveryColumn`]
//! re-draws the three row picks until together they touch all nine columns.

use std::str::FromStr;

use arrayvec::ArrayVec;
use rand::seq::{index, SliceRandom};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::ticket::{Grid, Ticket, TicketId};
use crate::types::{
    column_range, Number, CANDIDATES_PER_COLUMN, COLUMN_WIDTH, NUMBERS_PER_ROW, TICKET_COLUMNS,
    TICKET_ROWS,
};

/// Whether every column must end up with at least one number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnPolicy {
    /// Row picks are used as drawn; a column may stay empty.
    #[default]
    AsDrawn,
    /// Row picks are re-drawn until every column holds 1-3 numbers.
    CoverEveryColumn,
}

impl ColumnPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnPolicy::AsDrawn => "as-drawn",
            ColumnPolicy::CoverEveryColumn => "cover",
        }
    }
}

impl FromStr for ColumnPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "as-drawn" | "asdrawn" => Ok(ColumnPolicy::AsDrawn),
            "cover" | "cover-every-column" => Ok(ColumnPolicy::CoverEveryColumn),
            other => Err(format!("unknown column policy: {other}")),
        }
    }
}

/// Produces independent ticket batches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TicketGenerator {
    policy: ColumnPolicy,
}

/// Columns picked by one row.
type RowPick = ArrayVec<usize, NUMBERS_PER_ROW>;

impl TicketGenerator {
    pub fn new(policy: ColumnPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> ColumnPolicy {
        self.policy
    }

    /// Generate `count` tickets.
    ///
    /// `count` is expected to be clamped by the caller
    /// (see `tambola_types::clamp_ticket_count`); zero yields an empty batch.
    pub fn generate<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<Ticket> {
        let tickets: Vec<Ticket> = (0..count).map(|_| self.generate_one(rng)).collect();
        info!(
            count = tickets.len(),
            policy = self.policy.as_str(),
            "generated ticket batch"
        );
        tickets
    }

    /// Generate a single ticket.
    pub fn generate_one<R: Rng + ?Sized>(&self, rng: &mut R) -> Ticket {
        let mut candidates = column_candidates(rng);
        let picks = self.row_picks(rng);

        let mut grid: Grid = [[None; TICKET_COLUMNS]; TICKET_ROWS];
        for (row, pick) in picks.iter().enumerate() {
            for &column in pick {
                if let Some(number) = candidates[column].pop_at(0) {
                    grid[row][column] = Some(number);
                }
            }
        }

        Ticket::new_unchecked(TicketId::from_random_bytes(rng.random()), grid)
    }

    fn row_picks<R: Rng + ?Sized>(&self, rng: &mut R) -> [RowPick; TICKET_ROWS] {
        loop {
            let picks: [RowPick; TICKET_ROWS] = std::array::from_fn(|_| pick_row_columns(rng));
            match self.policy {
                ColumnPolicy::AsDrawn => return picks,
                ColumnPolicy::CoverEveryColumn => {
                    if covers_every_column(&picks) {
                        return picks;
                    }
                }
            }
        }
    }
}

/// Per-column queues of 3 ascending candidates.
fn column_candidates<R: Rng + ?Sized>(
    rng: &mut R,
) -> [ArrayVec<Number, CANDIDATES_PER_COLUMN>; TICKET_COLUMNS] {
    std::array::from_fn(|column| {
        let mut pool: ArrayVec<Number, { COLUMN_WIDTH as usize }> =
            column_range(column).collect();
        pool.shuffle(rng);

        let mut kept: ArrayVec<Number, CANDIDATES_PER_COLUMN> =
            pool.iter().take(CANDIDATES_PER_COLUMN).copied().collect();
        kept.sort_unstable();
        kept
    })
}

/// A uniformly random 5-subset of the column indices.
fn pick_row_columns<R: Rng + ?Sized>(rng: &mut R) -> RowPick {
    index::sample(rng, TICKET_COLUMNS, NUMBERS_PER_ROW)
        .into_iter()
        .collect()
}

fn covers_every_column(picks: &[RowPick; TICKET_ROWS]) -> bool {
    let mut seen = [false; TICKET_COLUMNS];
    for &column in picks.iter().flatten() {
        seen[column] = true;
    }
    seen.iter().all(|&s| s)
}

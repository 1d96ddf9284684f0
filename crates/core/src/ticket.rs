//! Ticket module - a player's 3 x 9 card and the numbers marked on it

use std::fmt;

use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::number_set::NumberSet;
use crate::types::{
    column_range, Cell, Number, NUMBERS_PER_ROW, NUMBERS_PER_TICKET, TICKET_COLUMNS, TICKET_ROWS,
};

/// Grid of a ticket, indexed `[row][column]`.
pub type Grid = [[Cell; TICKET_COLUMNS]; TICKET_ROWS];

/// Opaque ticket identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct TicketId(Uuid);

impl TicketId {
    /// Build an id from 16 random bytes (stamped as a v4 UUID).
    pub fn from_random_bytes(bytes: [u8; 16]) -> Self {
        Self(uuid::Builder::from_random_bytes(bytes).into_uuid())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

/// First layout rule a grid breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TicketLayoutError {
    #[error("ticket has {found} numbers, expected {NUMBERS_PER_TICKET}")]
    WrongNumberCount { found: usize },
    #[error("row {row} has {found} numbers, expected {NUMBERS_PER_ROW}")]
    WrongRowCount { row: usize, found: usize },
    #[error("{number} at row {row} does not belong in column {column}")]
    OutOfColumnRange {
        row: usize,
        column: usize,
        number: Number,
    },
    #[error("column {column} is not ascending at row {row}")]
    ColumnNotAscending { row: usize, column: usize },
}

/// A generated (or loaded) ticket.
///
/// The grid never changes after construction. `marked` collects every number
/// the session has called while this ticket was live, whether or not it is
/// on the grid; use [`Ticket::is_cell_marked`] for what a player would dab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ticket {
    id: TicketId,
    grid: Grid,
    marked: NumberSet,
}

impl Ticket {
    /// Wrap a generator-built grid. Layout is trusted, not re-checked.
    pub(crate) fn new_unchecked(id: TicketId, grid: Grid) -> Self {
        Self {
            id,
            grid,
            marked: NumberSet::new(),
        }
    }

    /// Build a ticket from an external grid, checking every layout rule.
    ///
    /// A column may be empty; that is a generator policy question, not a
    /// structural one (see `ColumnPolicy`).
    pub fn from_grid(id: TicketId, grid: Grid) -> Result<Self, TicketLayoutError> {
        validate_grid(&grid)?;
        Ok(Self::new_unchecked(id, grid))
    }

    pub fn id(&self) -> TicketId {
        self.id
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cell(&self, row: usize, column: usize) -> Cell {
        self.grid
            .get(row)
            .and_then(|r| r.get(column))
            .copied()
            .flatten()
    }

    pub fn row(&self, row: usize) -> impl Iterator<Item = Number> + '_ {
        self.grid
            .get(row)
            .into_iter()
            .flat_map(|r| r.iter().flatten().copied())
    }

    pub fn column(&self, column: usize) -> impl Iterator<Item = Number> + '_ {
        self.grid
            .iter()
            .filter_map(move |r| r.get(column).copied().flatten())
    }

    /// All numbers on the ticket, row-major.
    pub fn numbers(&self) -> impl Iterator<Item = Number> + '_ {
        self.grid.iter().flat_map(|r| r.iter().flatten().copied())
    }

    pub fn contains(&self, number: Number) -> bool {
        self.numbers().any(|n| n == number)
    }

    /// Every number marked against this ticket, on the grid or not.
    pub fn marked_numbers(&self) -> &NumberSet {
        &self.marked
    }

    pub fn is_marked(&self, number: Number) -> bool {
        self.marked.contains(number)
    }

    /// True when `number` is on the grid and has been called.
    pub fn is_cell_marked(&self, number: Number) -> bool {
        self.contains(number) && self.is_marked(number)
    }

    /// Grid numbers that have been called.
    pub fn matched_count(&self) -> usize {
        self.numbers().filter(|&n| self.is_marked(n)).count()
    }

    pub(crate) fn mark(&mut self, number: Number) {
        self.marked.insert(number);
    }

    pub(crate) fn clear_marks(&mut self) {
        self.marked.clear();
    }
}

/// Check a grid against the ticket layout rules.
pub fn validate_grid(grid: &Grid) -> Result<(), TicketLayoutError> {
    let total = grid.iter().flatten().flatten().count();
    if total != NUMBERS_PER_TICKET {
        return Err(TicketLayoutError::WrongNumberCount { found: total });
    }

    for (row, cells) in grid.iter().enumerate() {
        let found = cells.iter().flatten().count();
        if found != NUMBERS_PER_ROW {
            return Err(TicketLayoutError::WrongRowCount { row, found });
        }
        for (column, cell) in cells.iter().enumerate() {
            if let Some(number) = *cell {
                if !column_range(column).contains(&number) {
                    return Err(TicketLayoutError::OutOfColumnRange {
                        row,
                        column,
                        number,
                    });
                }
            }
        }
    }

    // Strictly ascending per column also rules out repeats: columns own
    // disjoint ranges.
    for column in 0..TICKET_COLUMNS {
        let mut prev: Option<Number> = None;
        for (row, cells) in grid.iter().enumerate() {
            if let Some(number) = cells[column] {
                if prev.is_some_and(|p| p >= number) {
                    return Err(TicketLayoutError::ColumnNotAscending { row, column });
                }
                prev = Some(number);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_grid() -> Grid {
        [
            [Some(1), None, Some(21), None, Some(41), None, Some(61), None, Some(81)],
            [None, Some(12), None, Some(33), None, Some(55), None, Some(77), Some(85)],
            [Some(9), Some(19), Some(30), None, None, Some(60), None, None, Some(90)],
        ]
    }

    fn id(byte: u8) -> TicketId {
        TicketId::from_random_bytes([byte; 16])
    }

    #[test]
    fn test_from_grid_accepts_valid_layout() {
        let ticket = Ticket::from_grid(id(1), sample_grid()).unwrap();
        assert_eq!(ticket.numbers().count(), 15);
        assert_eq!(ticket.row(0).collect::<Vec<_>>(), vec![1, 21, 41, 61, 81]);
        assert_eq!(ticket.column(8).collect::<Vec<_>>(), vec![81, 85, 90]);
        assert_eq!(ticket.cell(1, 1), Some(12));
        assert_eq!(ticket.cell(0, 1), None);
        assert_eq!(ticket.cell(5, 5), None);
        assert!(ticket.marked_numbers().is_empty());
    }

    #[test]
    fn test_from_grid_rejects_wrong_count() {
        let mut grid = sample_grid();
        grid[0][0] = None;
        assert_eq!(
            Ticket::from_grid(id(1), grid),
            Err(TicketLayoutError::WrongNumberCount { found: 14 })
        );
    }

    #[test]
    fn test_from_grid_rejects_unbalanced_rows() {
        let mut grid = sample_grid();
        grid[0][0] = None;
        grid[1][0] = Some(2);
        assert_eq!(
            Ticket::from_grid(id(1), grid),
            Err(TicketLayoutError::WrongRowCount { row: 0, found: 4 })
        );
    }

    #[test]
    fn test_from_grid_rejects_out_of_range() {
        let mut grid = sample_grid();
        grid[0][2] = Some(31);
        assert_eq!(
            Ticket::from_grid(id(1), grid),
            Err(TicketLayoutError::OutOfColumnRange {
                row: 0,
                column: 2,
                number: 31
            })
        );
    }

    #[test]
    fn test_from_grid_rejects_descending_column() {
        let mut grid = sample_grid();
        grid[0][0] = Some(10);
        assert_eq!(
            Ticket::from_grid(id(1), grid),
            Err(TicketLayoutError::ColumnNotAscending { row: 2, column: 0 })
        );
    }

    #[test]
    fn test_marking_is_independent_of_grid() {
        let mut ticket = Ticket::from_grid(id(2), sample_grid()).unwrap();
        ticket.mark(21);
        ticket.mark(50);

        assert!(ticket.is_marked(50));
        assert!(!ticket.is_cell_marked(50));
        assert!(ticket.is_cell_marked(21));
        assert_eq!(ticket.matched_count(), 1);

        ticket.clear_marks();
        assert!(ticket.marked_numbers().is_empty());
        assert_eq!(ticket.grid(), &sample_grid());
    }

    #[test]
    fn test_ticket_id_display_is_compact() {
        let shown = id(0xab).to_string();
        assert_eq!(shown.len(), 32);
        assert_eq!(id(0xab), id(0xab));
        assert_ne!(id(1), id(2));
    }
}

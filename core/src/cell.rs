use serde::{Deserialize, Serialize};

/// Rendering symbol derived from a cell's state. Mapping symbols to
/// characters is owned by the presentation layer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CellSymbol {
    Flagged,
    Hidden,
    Mine,
    Empty,
    Count(u8),
}

/// One board position: mine presence, visibility flags, and the precomputed
/// adjacent-mine count.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    has_mine: bool,
    revealed: bool,
    flagged: bool,
    adjacent_mines: u8,
}

impl Cell {
    pub const fn has_mine(self) -> bool {
        self.has_mine
    }

    pub const fn is_revealed(self) -> bool {
        self.revealed
    }

    pub const fn is_flagged(self) -> bool {
        self.flagged
    }

    /// Meaningful only for cells without a mine; mined cells keep the
    /// default of zero.
    pub const fn adjacent_mines(self) -> u8 {
        self.adjacent_mines
    }

    pub(crate) fn place_mine(&mut self) {
        self.has_mine = true;
    }

    pub(crate) fn reveal(&mut self) {
        self.revealed = true;
    }

    pub(crate) fn toggle_flag(&mut self) {
        self.flagged = !self.flagged;
    }

    pub(crate) fn set_adjacent_mines(&mut self, count: u8) {
        debug_assert!(count <= 8);
        self.adjacent_mines = count;
    }

    pub fn symbol(self) -> CellSymbol {
        if self.flagged && !self.revealed {
            return CellSymbol::Flagged;
        }
        if !self.revealed {
            return CellSymbol::Hidden;
        }
        if self.has_mine {
            return CellSymbol::Mine;
        }
        match self.adjacent_mines {
            0 => CellSymbol::Empty,
            count => CellSymbol::Count(count),
        }
    }
}

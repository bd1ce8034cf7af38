use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use generator::*;
pub use snapshot::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod generator;
mod snapshot;
mod types;

pub const DEFAULT_SIZE: Coord = 10;
pub const DEFAULT_MINES: CellCount = 10;

/// Shape of a game: a square board plus the number of hidden mines.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    size: Coord,
    mines: CellCount,
}

impl GameConfig {
    /// Caller guarantees `0 < mines < size * size`.
    pub const fn new_unchecked(size: Coord, mines: CellCount) -> Self {
        Self { size, mines }
    }

    pub fn new(size: Coord, mines: CellCount) -> Result<Self> {
        if mines == 0 || mines >= square(size) {
            return Err(GameError::TooManyMines);
        }
        Ok(Self::new_unchecked(size, mines))
    }

    pub const fn size(&self) -> Coord {
        self.size
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn total_cells(&self) -> CellCount {
        square(self.size)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mines
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(DEFAULT_SIZE, DEFAULT_MINES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_ten_by_ten_with_ten_mines() {
        let config = GameConfig::default();

        assert_eq!(config.size(), 10);
        assert_eq!(config.mines(), 10);
        assert_eq!(config.total_cells(), 100);
        assert_eq!(config.safe_cells(), 90);
    }

    #[test]
    fn config_rejects_zero_mines() {
        assert_eq!(GameConfig::new(10, 0), Err(GameError::TooManyMines));
    }

    #[test]
    fn config_rejects_full_board() {
        assert_eq!(GameConfig::new(3, 9), Err(GameError::TooManyMines));
        assert!(GameConfig::new(3, 8).is_ok());
    }
}

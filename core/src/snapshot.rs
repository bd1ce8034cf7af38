use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// On-disk snapshot format version; bump when the layout changes.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Versioned, lossless capture of a board: grid dimensions, mine layout,
/// per-cell revealed/flagged bits, and the game-state counters. This is the
/// only representation the persistence layer sees; adjacency counts are
/// recomputed on restore.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub version: u32,
    pub size: Coord,
    pub mine_coords: Vec<Coord2>,
    pub revealed: Array2<bool>,
    pub flagged: Array2<bool>,
    pub revealed_count: CellCount,
    pub state: BoardState,
}

impl BoardSnapshot {
    pub fn from_board(board: &Board) -> Self {
        let size = board.size();
        let dim = (usize::from(size), usize::from(size));
        let mut mine_coords = Vec::new();
        let mut revealed = Array2::default(dim);
        let mut flagged = Array2::default(dim);

        for row in 0..size {
            for col in 0..size {
                let coords = (row, col);
                let cell = board.cell(coords);
                if cell.has_mine() {
                    mine_coords.push(coords);
                }
                revealed[coords.to_nd_index()] = cell.is_revealed();
                flagged[coords.to_nd_index()] = cell.is_flagged();
            }
        }

        Self {
            version: SNAPSHOT_VERSION,
            size,
            mine_coords,
            revealed,
            flagged,
            revealed_count: board.revealed_count(),
            state: board.state(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.version != SNAPSHOT_VERSION {
            return Err(GameError::UnsupportedVersion);
        }

        let expected = (usize::from(self.size), usize::from(self.size));
        if self.revealed.dim() != expected || self.flagged.dim() != expected {
            return Err(GameError::SnapshotShape);
        }

        for &coords in &self.mine_coords {
            if coords.0 >= self.size || coords.1 >= self.size {
                return Err(GameError::OutOfBounds);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn played_board() -> Board {
        let mut board = Board::from_mine_coords(4, &[(0, 0), (3, 3)]).unwrap();
        board.reveal((1, 1)).unwrap();
        board.toggle_flag((0, 0)).unwrap();
        board
    }

    #[test]
    fn round_trip_restores_an_identical_board() {
        let board = played_board();

        let snapshot = BoardSnapshot::from_board(&board);
        let restored = Board::from_snapshot(&snapshot).unwrap();

        assert_eq!(restored, board);
        assert_eq!(restored.revealed_count(), board.revealed_count());
        assert_eq!(restored.state(), board.state());
        assert_eq!(restored.game_config(), board.game_config());
    }

    #[test]
    fn round_trip_survives_json_encoding() {
        let board = played_board();
        let snapshot = BoardSnapshot::from_board(&board);

        let json = serde_json::to_string(&snapshot).unwrap();
        let decoded: BoardSnapshot = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded, snapshot);
        assert_eq!(Board::from_snapshot(&decoded).unwrap(), board);
    }

    #[test]
    fn terminal_state_survives_the_round_trip() {
        let mut board = Board::from_mine_coords(2, &[(0, 0)]).unwrap();
        board.reveal((0, 0)).unwrap();

        let restored = Board::from_snapshot(&BoardSnapshot::from_board(&board)).unwrap();

        assert!(restored.is_terminal());
        assert!(!restored.is_victory());
    }

    #[test]
    fn validate_rejects_unknown_versions() {
        let mut snapshot = BoardSnapshot::from_board(&played_board());
        snapshot.version = SNAPSHOT_VERSION + 1;

        assert_eq!(snapshot.validate(), Err(GameError::UnsupportedVersion));
    }

    #[test]
    fn validate_rejects_shape_mismatch() {
        let mut snapshot = BoardSnapshot::from_board(&played_board());
        snapshot.flagged = Array2::default((3, 4));

        assert_eq!(snapshot.validate(), Err(GameError::SnapshotShape));
    }

    #[test]
    fn validate_rejects_out_of_bounds_mines() {
        let mut snapshot = BoardSnapshot::from_board(&played_board());
        snapshot.mine_coords.push((4, 0));

        assert_eq!(snapshot.validate(), Err(GameError::OutOfBounds));
    }
}

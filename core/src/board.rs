use std::collections::VecDeque;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions: Active -> Won, Active -> Lost. Terminal states accept
/// no further mutations.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardState {
    Active,
    Won,
    Lost,
}

impl BoardState {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::Active
    }
}

/// Outcome of a successful `reveal` call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Flagged target or terminal board; nothing changed.
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// Outcome of a successful `toggle_flag` call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagOutcome {
    NoChange,
    Toggled,
}

impl FlagOutcome {
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Toggled)
    }
}

/// The full grid plus game-state counters and the terminal-state flag.
///
/// The board exclusively owns its cells; callers inspect them through
/// [`Board::cell_at`] copies and mutate only through `reveal`/`toggle_flag`.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    grid: Array2<Cell>,
    mines: CellCount,
    revealed_count: CellCount,
    state: BoardState,
}

impl Board {
    /// Default 10x10 board with 10 mines and an entropy-seeded layout.
    pub fn new() -> Self {
        Self::with_seeder(GameConfig::default(), RandomMineSeeder::from_entropy())
    }

    pub fn with_seeder(config: GameConfig, seeder: impl MineSeeder) -> Self {
        Self::from_mine_mask(seeder.seed_mines(config))
    }

    /// Builds a board from an explicit mine mask; the mine count is taken
    /// from the mask itself.
    pub fn from_mine_mask(mask: Array2<bool>) -> Self {
        let mut grid: Array2<Cell> = Array2::default(mask.raw_dim());
        let mut mines: CellCount = 0;
        for (index, &has_mine) in mask.indexed_iter() {
            if has_mine {
                grid[index].place_mine();
                mines += 1;
            }
        }

        let mut board = Self {
            grid,
            mines,
            revealed_count: 0,
            state: BoardState::Active,
        };
        board.compute_adjacency();
        board
    }

    /// Builds a board with mines at exactly the given coordinates. This is
    /// the deterministic entry point tests and snapshot restore use.
    pub fn from_mine_coords(size: Coord, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mask: Array2<bool> = Array2::default((usize::from(size), usize::from(size)));
        for &coords in mine_coords {
            if coords.0 >= size || coords.1 >= size {
                return Err(GameError::OutOfBounds);
            }
            mask[coords.to_nd_index()] = true;
        }
        Ok(Self::from_mine_mask(mask))
    }

    /// Restores the exact board a snapshot was taken from: same mine
    /// layout, same revealed/flagged cells, same counters.
    pub fn from_snapshot(snapshot: &BoardSnapshot) -> Result<Self> {
        snapshot.validate()?;

        let mut board = Self::from_mine_coords(snapshot.size, &snapshot.mine_coords)?;
        for (index, _) in snapshot.revealed.indexed_iter().filter(|&(_, &on)| on) {
            board.grid[index].reveal();
            board.revealed_count += 1;
        }
        for (index, _) in snapshot.flagged.indexed_iter().filter(|&(_, &on)| on) {
            board.grid[index].toggle_flag();
        }
        board.state = snapshot.state;

        // The grid is authoritative; a disagreeing counter means the file
        // was edited or truncated.
        if board.revealed_count != snapshot.revealed_count {
            log::warn!(
                "Snapshot revealed_count {} disagrees with the grid, using {}",
                snapshot.revealed_count,
                board.revealed_count
            );
        }
        Ok(board)
    }

    /// Stores the mined-neighbor count on every safe cell. Mined cells are
    /// skipped; their count is meaningless.
    fn compute_adjacency(&mut self) {
        let size = self.size();
        for row in 0..size {
            for col in 0..size {
                let coords = (row, col);
                if self.cell(coords).has_mine() {
                    continue;
                }
                let count = self
                    .iter_neighbors(coords)
                    .filter(|&pos| self.cell(pos).has_mine())
                    .count() as u8;
                self.grid[coords.to_nd_index()].set_adjacent_mines(count);
            }
        }
    }

    pub fn size(&self) -> Coord {
        self.grid.nrows() as Coord
    }

    pub fn mine_count(&self) -> CellCount {
        self.mines
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn safe_cells(&self) -> CellCount {
        square(self.size()) - self.mines
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.size(), self.mines)
    }

    pub fn state(&self) -> BoardState {
        self.state
    }

    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn is_victory(&self) -> bool {
        matches!(self.state, BoardState::Won)
    }

    /// Bounds-checked read access; returns a copy of the cell's state.
    pub fn cell_at(&self, coords: Coord2) -> Result<Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(self.cell(coords))
    }

    pub(crate) fn cell(&self, coords: Coord2) -> Cell {
        self.grid[coords.to_nd_index()]
    }

    fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size && coords.1 < size {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size())
    }

    /// Reveals a cell. An already-revealed target is the one recoverable
    /// error the caller is expected to handle specially; a flagged target
    /// is a silent no-op.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.validate_coords(coords)?;

        if self.state.is_terminal() {
            return Ok(RevealOutcome::NoChange);
        }

        let cell = self.cell(coords);
        if cell.is_revealed() {
            return Err(GameError::AlreadyRevealed);
        }
        if cell.is_flagged() {
            // Flagged cells cannot be revealed directly.
            return Ok(RevealOutcome::NoChange);
        }

        self.grid[coords.to_nd_index()].reveal();
        self.revealed_count += 1;

        if cell.has_mine() {
            log::debug!("Mine hit at {:?}", coords);
            self.reveal_all_mines();
            self.state = BoardState::Lost;
            return Ok(RevealOutcome::HitMine);
        }

        if cell.adjacent_mines() == 0 {
            self.cascade_from(coords);
        }

        if self.revealed_count == self.safe_cells() {
            self.state = BoardState::Won;
            Ok(RevealOutcome::Won)
        } else {
            Ok(RevealOutcome::Revealed)
        }
    }

    /// Work-list flood-fill over the zero-count region. The revealed flag
    /// is the sole cycle-breaker: it is checked when a coordinate is popped,
    /// so a cell queued by two cascade paths is still revealed and counted
    /// exactly once. Mined and flagged cells never enter the region, and
    /// cells with a positive count are revealed without propagating.
    fn cascade_from(&mut self, origin: Coord2) {
        let mut to_visit: VecDeque<Coord2> = self.iter_neighbors(origin).collect();

        while let Some(coords) = to_visit.pop_front() {
            let cell = self.cell(coords);
            if cell.is_revealed() || cell.is_flagged() || cell.has_mine() {
                continue;
            }

            self.grid[coords.to_nd_index()].reveal();
            self.revealed_count += 1;
            log::trace!(
                "Cascade revealed {:?}, adjacent mines: {}",
                coords,
                cell.adjacent_mines()
            );

            if cell.adjacent_mines() == 0 {
                to_visit.extend(self.iter_neighbors(coords));
            }
        }
    }

    /// Loss transition: the final board shows every mine location.
    fn reveal_all_mines(&mut self) {
        for cell in self.grid.iter_mut() {
            if cell.has_mine() && !cell.is_revealed() {
                cell.reveal();
                self.revealed_count += 1;
            }
        }
    }

    /// Toggles the flag on an unrevealed cell; revealed cells and terminal
    /// boards are left untouched.
    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<FlagOutcome> {
        let coords = self.validate_coords(coords)?;

        if self.state.is_terminal() || self.cell(coords).is_revealed() {
            return Ok(FlagOutcome::NoChange);
        }

        self.grid[coords.to_nd_index()].toggle_flag();
        Ok(FlagOutcome::Toggled)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

use ndarray::Array2;

use crate::GameConfig;

pub use random::*;

mod random;

/// Produces the mine mask a board is built from.
pub trait MineSeeder {
    fn seed_mines(self, config: GameConfig) -> Array2<bool>;
}

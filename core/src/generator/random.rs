use ndarray::Array2;
use rand::prelude::*;

use super::MineSeeder;
use crate::{CellCount, GameConfig, ToNdIndex};

/// Places mines by uniform coordinate sampling, resampling any coordinate
/// that already holds a mine until the requested count is reached.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RandomMineSeeder {
    seed: u64,
}

impl RandomMineSeeder {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Seeder with a seed drawn from the thread-local generator.
    pub fn from_entropy() -> Self {
        Self::new(rand::rng().random())
    }
}

impl MineSeeder for RandomMineSeeder {
    fn seed_mines(self, config: GameConfig) -> Array2<bool> {
        let size = config.size();
        let mut mask: Array2<bool> = Array2::default((usize::from(size), usize::from(size)));

        // An over-full request would make the sampling loop spin forever;
        // clamp it and leave a trace.
        let requested = config.mines();
        let target = requested.min(config.total_cells());
        if target < requested {
            log::warn!(
                "Requested {} mines but the board only fits {}",
                requested,
                target
            );
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut placed: CellCount = 0;
        while placed < target {
            let coords = (rng.random_range(0..size), rng.random_range(0..size));
            let cell = &mut mask[coords.to_nd_index()];
            if !*cell {
                *cell = true;
                placed += 1;
            }
        }

        log::debug!("Seeded {} mines on a {}x{} board", placed, size, size);
        mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_exactly_the_requested_mine_count() {
        let mask = RandomMineSeeder::new(42).seed_mines(GameConfig::default());

        assert_eq!(mask.iter().filter(|&&mine| mine).count(), 10);
        assert_eq!(mask.dim(), (10, 10));
    }

    #[test]
    fn same_seed_gives_the_same_layout() {
        let config = GameConfig::default();

        let first = RandomMineSeeder::new(7).seed_mines(config);
        let second = RandomMineSeeder::new(7).seed_mines(config);

        assert_eq!(first, second);
    }

    #[test]
    fn different_seeds_usually_differ() {
        let config = GameConfig::default();

        let first = RandomMineSeeder::new(1).seed_mines(config);
        let second = RandomMineSeeder::new(2).seed_mines(config);

        assert_ne!(first, second);
    }

    #[test]
    fn dense_boards_still_terminate() {
        let config = GameConfig::new(4, 15).unwrap();

        let mask = RandomMineSeeder::new(3).seed_mines(config);

        assert_eq!(mask.iter().filter(|&&mine| mine).count(), 15);
    }
}

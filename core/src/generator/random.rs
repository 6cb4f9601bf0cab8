use alloc::vec::Vec;

use super::*;

/// Deals values `1..=pair_count` twice each in a uniformly random order.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, pair_count: TileValue) -> Result<Board> {
        use rand::prelude::*;

        if pair_count == 0 {
            return Err(GameError::InvalidPairCount);
        }

        let mut tiles: Vec<Tile> = (1..=pair_count)
            .flat_map(|value| [Tile::new(value), Tile::new(value)])
            .collect();

        let mut rng = SmallRng::seed_from_u64(self.seed);
        tiles.shuffle(&mut rng);

        log::debug!("dealt {} pairs with seed {}", pair_count, self.seed);
        Ok(Board::from_tiles_unchecked(tiles))
    }
}

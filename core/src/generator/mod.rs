use crate::*;
pub use random::*;

mod random;

pub trait BoardGenerator {
    fn generate(self, pair_count: TileValue) -> Result<Board>;
}

use serde::{Deserialize, Serialize};

/// Value printed on a tile face. Each value is carried by exactly two tiles.
pub type TileValue = u8;

/// Position of a tile in the board's flat ordering.
pub type TileIndex = usize;

/// Count type used for completed selection pairs.
pub type MoveCount = u32;

/// Pairs dealt on a standard board.
pub const PAIR_COUNT: TileValue = 8;

/// Columns of the presented grid, a standard board is square.
pub const GRID_COLUMNS: usize = 4;

/// How long a mismatched pair stays face up before being hidden again.
pub const MISMATCH_DELAY_MS: u32 = 1000;

/// Identifies one scheduled mismatch delay, a fire carrying any other token is stale.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DelayToken(u64);

impl DelayToken {
    pub(crate) const fn new(generation: u64) -> Self {
        Self(generation)
    }

    pub const fn generation(self) -> u64 {
        self.0
    }
}

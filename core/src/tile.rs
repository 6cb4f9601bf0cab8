use core::fmt;
use serde::{Deserialize, Serialize};

use crate::TileValue;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub value: TileValue,
    pub flipped: bool,
}

impl Tile {
    pub const fn new(value: TileValue) -> Self {
        Self {
            value,
            flipped: false,
        }
    }

    pub const fn face(self) -> TileFace {
        if self.flipped {
            TileFace::Value(self.value)
        } else {
            TileFace::Blank
        }
    }
}

/// What a tile slot should display.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileFace {
    Blank,
    Value(TileValue),
}

impl Default for TileFace {
    fn default() -> Self {
        Self::Blank
    }
}

impl fmt::Display for TileFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blank => Ok(()),
            Self::Value(value) => write!(f, "{}", value),
        }
    }
}

use alloc::vec::Vec;
use core::ops::Index;
use serde::{Deserialize, Serialize};

use crate::*;

/// Ordered tiles of one game, every value present is carried by exactly two tiles.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedBoard")]
pub struct Board {
    tiles: Vec<Tile>,
}

/// Wire shape of [`Board`], pairing is checked before it becomes one.
#[derive(Deserialize)]
struct UncheckedBoard {
    tiles: Vec<Tile>,
}

impl TryFrom<UncheckedBoard> for Board {
    type Error = GameError;

    fn try_from(unchecked: UncheckedBoard) -> Result<Self> {
        check_pairs(unchecked.tiles.iter().map(|tile| tile.value))?;
        Ok(Self::from_tiles_unchecked(unchecked.tiles))
    }
}

fn check_pairs(values: impl Iterator<Item = TileValue> + Clone) -> Result<()> {
    let mut occurrences = [0usize; TileValue::MAX as usize + 1];
    let mut empty = true;
    for value in values.clone() {
        occurrences[usize::from(value)] += 1;
        empty = false;
    }
    if empty {
        return Err(GameError::InvalidPairCount);
    }

    match values
        .into_iter()
        .find(|&value| occurrences[usize::from(value)] != 2)
    {
        Some(unpaired) => Err(GameError::UnpairedValue(unpaired)),
        None => Ok(()),
    }
}

impl Board {
    pub(crate) fn from_tiles_unchecked(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }

    /// Builds a board in exactly the given order, all tiles face down.
    pub fn from_values(values: &[TileValue]) -> Result<Self> {
        check_pairs(values.iter().copied())?;

        Ok(Self::from_tiles_unchecked(
            values.iter().copied().map(Tile::new).collect(),
        ))
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn pair_count(&self) -> usize {
        self.tiles.len() / 2
    }

    pub fn validate_index(&self, index: TileIndex) -> Result<TileIndex> {
        if index < self.tiles.len() {
            Ok(index)
        } else {
            Err(GameError::InvalidTileIndex)
        }
    }

    pub fn tile(&self, index: TileIndex) -> Result<&Tile> {
        self.tiles.get(index).ok_or(GameError::InvalidTileIndex)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    pub fn values(&self) -> impl Iterator<Item = TileValue> + '_ {
        self.tiles.iter().map(|tile| tile.value)
    }

    pub fn flipped_count(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.flipped).count()
    }

    pub fn is_complete(&self) -> bool {
        self.tiles.iter().all(|tile| tile.flipped)
    }

    /// Turns every tile face down, keeping the dealt order.
    pub fn reset(&mut self) {
        for tile in &mut self.tiles {
            tile.flipped = false;
        }
    }

    pub(crate) fn set_flipped(&mut self, index: TileIndex, flipped: bool) {
        self.tiles[index].flipped = flipped;
    }
}

impl Index<TileIndex> for Board {
    type Output = Tile;

    fn index(&self, index: TileIndex) -> &Self::Output {
        &self.tiles[index]
    }
}

use crate::io::configuration::TILE_KINDS;
use crate::tiles::hand::Hand;
use crate::tiles::tile::Tile;
use bitvec::prelude::*;

/// Fixed-size bitset over the 52 colored tile identities
///
/// Indexed by [`Tile::index`]. Melds carry one for their tiles and the solver
/// builds one per hand, so a meld's joker shortfall is a single overlap count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileMask {
    bits: BitVec,
}

impl Default for TileMask {
    fn default() -> Self {
        Self::new()
    }
}

impl TileMask {
    /// Create a mask with no tiles present
    pub fn new() -> Self {
        Self {
            bits: bitvec![0; TILE_KINDS],
        }
    }

    /// Insert a tile
    pub fn insert(&mut self, tile: Tile) {
        self.bits.set(tile.index(), true);
    }

    /// Test tile membership
    pub fn contains(&self, tile: Tile) -> bool {
        self.bits.get(tile.index()).as_deref() == Some(&true)
    }

    /// Number of tiles present in both masks
    pub fn overlap(&self, other: &Self) -> usize {
        self.bits
            .iter_ones()
            .filter(|&index| other.bits.get(index).as_deref() == Some(&true))
            .count()
    }

    /// Count tiles in the mask
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }
}

impl FromIterator<Tile> for TileMask {
    fn from_iter<I: IntoIterator<Item = Tile>>(iter: I) -> Self {
        let mut mask = Self::new();
        for tile in iter {
            mask.insert(tile);
        }
        mask
    }
}

impl Hand {
    /// Mask of the colored tiles present at least once
    pub fn mask(&self) -> TileMask {
        self.tiles().map(|(tile, _)| tile).collect()
    }
}

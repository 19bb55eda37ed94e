//! Seeded dealing of random puzzles from a standard tile set

use crate::algorithm::library::MeldLibrary;
use crate::io::configuration::{COPIES_PER_TILE, JOKERS_PER_SET};
use crate::io::input::Puzzle;
use crate::tiles::hand::Hand;
use crate::tiles::tile::{Tile, Token};
use log::debug;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Deterministic dealer for reproducible puzzles
///
/// The board is built from whole library melds, so it always decomposes.
/// The reserve is drawn uniformly from the tiles that remain.
pub struct Dealer {
    rng: StdRng,
}

impl Dealer {
    /// Create a dealer from a seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Every tile of a standard set: two copies of each colored tile and two jokers
    pub fn standard_set() -> Vec<Token> {
        let mut tokens: Vec<Token> = Tile::all()
            .flat_map(|tile| std::iter::repeat_n(Token::Colored(tile), COPIES_PER_TILE))
            .collect();
        tokens.extend(std::iter::repeat_n(Token::Joker, JOKERS_PER_SET));
        tokens
    }

    /// Deal a board of up to `meld_count` melds and a reserve of up to `reserve_size` tiles
    ///
    /// Stops early when the set runs out of complete melds or tiles.
    pub fn deal(&mut self, library: &MeldLibrary, meld_count: usize, reserve_size: usize) -> Puzzle {
        let mut pool = Hand::from_tokens(&Self::standard_set());
        let mut board = Vec::new();

        for _ in 0..meld_count {
            let available: Vec<_> = library
                .melds()
                .iter()
                .filter(|meld| meld.tiles().iter().all(|&tile| pool.count(tile) > 0))
                .collect();
            if available.is_empty() {
                break;
            }
            let choice = self.rng.random_range(0..available.len());
            let Some(meld) = available.get(choice) else {
                break;
            };
            for &tile in meld.tiles() {
                pool.take(tile, 1);
                board.push(Token::Colored(tile));
            }
        }

        let mut remaining = pool.to_tokens();
        remaining.shuffle(&mut self.rng);
        remaining.truncate(reserve_size);

        debug!(
            "dealt board of {} tiles and reserve of {} tiles",
            board.len(),
            remaining.len()
        );

        Puzzle {
            board,
            reserve: remaining,
        }
    }
}

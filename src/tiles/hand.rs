//! Multiset of tiles under consideration
//!
//! Counts live in a dense color-by-number grid plus a separate joker count.
//! A zero cell means the tile is absent, so iteration and canonical keys only
//! ever see present tiles.

use crate::io::configuration::{COLOR_COUNT, MAX_NUMBER, MIN_NUMBER};
use crate::tiles::tile::{Tile, Token};
use ndarray::Array2;

/// A multiset of colored tiles and jokers
///
/// Operations that change content return a new `Hand`; a hand shared with a
/// pending search branch is never modified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hand {
    counts: Array2<u32>,
    jokers: u32,
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}

impl Hand {
    /// Create an empty hand
    pub fn new() -> Self {
        Self {
            counts: Array2::zeros((COLOR_COUNT, MAX_NUMBER as usize)),
            jokers: 0,
        }
    }

    /// Build a hand from a token sequence
    pub fn from_tokens<'a, I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = &'a Token>,
    {
        let mut hand = Self::new();
        for &token in tokens {
            hand.insert(token, 1);
        }
        hand
    }

    /// Number of copies of `tile`
    pub fn count(&self, tile: Tile) -> u32 {
        self.counts.get(Self::cell(tile)).copied().unwrap_or(0)
    }

    /// Number of jokers
    pub const fn jokers(&self) -> u32 {
        self.jokers
    }

    /// Total number of tiles, jokers included
    pub fn len(&self) -> usize {
        self.counts.sum() as usize + self.jokers as usize
    }

    /// Whether the hand holds no tiles at all
    pub fn is_empty(&self) -> bool {
        self.jokers == 0 && self.counts.iter().all(|&count| count == 0)
    }

    /// Present colored tiles with their counts, in canonical order
    pub fn tiles(&self) -> impl Iterator<Item = (Tile, u32)> + '_ {
        self.counts
            .indexed_iter()
            .filter(|&(_, &count)| count > 0)
            .filter_map(|((color, number), &count)| {
                let index = color * MAX_NUMBER as usize + number;
                Tile::from_index(index).map(|tile| (tile, count))
            })
    }

    /// First present colored tile in canonical order
    pub fn first_tile(&self) -> Option<Tile> {
        self.tiles().next().map(|(tile, _)| tile)
    }

    /// Return a copy with `count` more copies of `token`
    #[must_use]
    pub fn with(&self, token: Token, count: u32) -> Self {
        let mut hand = self.clone();
        hand.insert(token, count);
        hand
    }

    /// Return the multiset union of two hands
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            counts: &self.counts + &other.counts,
            jokers: self.jokers + other.jokers,
        }
    }

    /// Return a copy with one copy of `token` removed
    ///
    /// Returns `None` when the token is absent.
    #[must_use]
    pub fn without(&self, token: Token) -> Option<Self> {
        let mut hand = self.clone();
        match token {
            Token::Joker => {
                hand.jokers = hand.jokers.checked_sub(1)?;
            }
            Token::Colored(tile) => {
                let cell = hand.counts.get_mut(Self::cell(tile))?;
                *cell = cell.checked_sub(1)?;
            }
        }
        Some(hand)
    }

    /// Whether every tile of `other` is present in `self` at least as often
    pub fn contains_all(&self, other: &Self) -> bool {
        self.jokers >= other.jokers
            && self
                .counts
                .iter()
                .zip(other.counts.iter())
                .all(|(mine, theirs)| mine >= theirs)
    }

    /// Expand to one token per tile, colored tiles first in canonical order
    pub fn to_tokens(&self) -> Vec<Token> {
        let mut tokens = Vec::with_capacity(self.len());
        for (tile, count) in self.tiles() {
            tokens.extend(std::iter::repeat_n(Token::Colored(tile), count as usize));
        }
        tokens.extend(std::iter::repeat_n(Token::Joker, self.jokers as usize));
        tokens
    }

    pub(crate) fn insert(&mut self, token: Token, count: u32) {
        match token {
            Token::Joker => self.jokers += count,
            Token::Colored(tile) => {
                if let Some(cell) = self.counts.get_mut(Self::cell(tile)) {
                    *cell += count;
                }
            }
        }
    }

    /// Remove up to `count` copies of `tile`, returning how many were taken
    pub(crate) fn take(&mut self, tile: Tile, count: u32) -> u32 {
        self.counts.get_mut(Self::cell(tile)).map_or(0, |cell| {
            let taken = (*cell).min(count);
            *cell -= taken;
            taken
        })
    }

    /// Remove up to `count` jokers, returning how many were taken
    pub(crate) fn take_jokers(&mut self, count: u32) -> u32 {
        let taken = self.jokers.min(count);
        self.jokers -= taken;
        taken
    }

    const fn cell(tile: Tile) -> (usize, usize) {
        (
            tile.color().index(),
            (tile.number() - MIN_NUMBER) as usize,
        )
    }
}

impl<'a> FromIterator<&'a Token> for Hand {
    fn from_iter<I: IntoIterator<Item = &'a Token>>(iter: I) -> Self {
        Self::from_tokens(iter)
    }
}

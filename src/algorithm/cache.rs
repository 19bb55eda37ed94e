use crate::algorithm::solver::Solution;
use crate::tiles::hand::Hand;
use crate::tiles::tile::Tile;
use std::collections::HashMap;

/// Order-independent identity of a hand's contents
///
/// Holds the present colored tiles with their counts in canonical order,
/// followed by the joker count in its own slot. Equal multisets always
/// produce equal keys.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct HandKey {
    entries: Vec<(Tile, u32)>,
    jokers: u32,
}

impl HandKey {
    /// Create the canonical key of a hand
    pub fn new(hand: &Hand) -> Self {
        Self {
            entries: hand.tiles().collect(),
            jokers: hand.jokers(),
        }
    }

    /// Colored entries in canonical order
    pub fn entries(&self) -> &[(Tile, u32)] {
        &self.entries
    }

    /// Joker count
    pub const fn jokers(&self) -> u32 {
        self.jokers
    }
}

impl Hand {
    /// Canonical key of this hand
    pub fn key(&self) -> HandKey {
        HandKey::new(self)
    }
}

/// Memoization table for one partition search
///
/// Stores the outcome for every hand the search has finished with: the
/// witness when the hand decomposes, `None` when it provably does not.
#[derive(Default)]
pub struct SolveCache {
    outcomes: HashMap<HandKey, Option<Solution>>,

    /// Cache performance statistics
    pub stats: CacheStats,
}

/// Performance metrics for cache effectiveness
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: usize,
    /// Number of cache misses
    pub misses: usize,
}

impl SolveCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a finished outcome, recording a hit or miss
    ///
    /// The outer `Option` says whether the hand was seen; the inner one is the
    /// stored outcome.
    pub fn lookup(&mut self, key: &HandKey) -> Option<Option<Solution>> {
        if let Some(outcome) = self.outcomes.get(key) {
            self.stats.hits += 1;
            Some(outcome.clone())
        } else {
            self.stats.misses += 1;
            None
        }
    }

    /// Record the outcome for a hand
    pub fn store(&mut self, key: HandKey, outcome: Option<Solution>) {
        self.outcomes.insert(key, outcome);
    }

    /// Number of stored outcomes
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Whether nothing has been stored yet
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

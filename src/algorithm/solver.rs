//! Exact partition of a hand into library melds
//!
//! Memoized backtracking. Each step picks the first colored tile of the hand
//! as pivot and tries only melds containing it: whatever partition exists
//! must cover that tile with exactly one meld, so nothing is missed. The
//! first meld whose residual decomposes wins.

use crate::algorithm::cache::{CacheStats, SolveCache};
use crate::algorithm::library::{Meld, MeldLibrary};
use crate::algorithm::subtraction::{JokerAssignment, Subtraction, apply, joker_shortfall};
use crate::tiles::hand::Hand;
use crate::tiles::tile::{Tile, Token};
use log::{debug, trace};
use std::fmt;

/// One meld of a solution with the tiles its jokers stood in for
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    meld: Meld,
    jokers: JokerAssignment,
}

impl Placement {
    /// Pair a meld with its joker assignment
    pub const fn new(meld: Meld, jokers: JokerAssignment) -> Self {
        Self { meld, jokers }
    }

    /// The meld laid down
    pub const fn meld(&self) -> &Meld {
        &self.meld
    }

    /// Tiles covered by jokers, in meld order
    pub fn jokers(&self) -> &[Tile] {
        &self.jokers
    }

    /// Physical tokens used, in meld order, with jokers in substituted slots
    pub fn tokens(&self) -> Vec<Token> {
        self.meld
            .tiles()
            .iter()
            .map(|&tile| {
                if self.jokers.contains(&tile) {
                    Token::Joker
                } else {
                    Token::Colored(tile)
                }
            })
            .collect()
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slots: Vec<String> = self
            .meld
            .tiles()
            .iter()
            .map(|tile| {
                if self.jokers.contains(tile) {
                    format!("J({tile})")
                } else {
                    tile.to_string()
                }
            })
            .collect();
        write!(f, "{}", slots.join(" "))
    }
}

/// An ordered partition of a hand into melds
///
/// An empty solution is the witness for an empty hand; a hand with no
/// partition has no `Solution` at all.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Solution {
    placements: Vec<Placement>,
}

impl Solution {
    /// Melds in the order the search chose them
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Number of melds
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Whether the solution has no melds
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Total jokers consumed across all melds
    pub fn jokers_used(&self) -> usize {
        self.placements.iter().map(|p| p.jokers.len()).sum()
    }

    /// The multiset of physical tiles the solution consumes
    pub fn to_hand(&self) -> Hand {
        let tokens: Vec<Token> = self.placements.iter().flat_map(Placement::tokens).collect();
        Hand::from_tokens(&tokens)
    }

    fn prepend(mut self, placement: Placement) -> Self {
        self.placements.insert(0, placement);
        self
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, placement) in self.placements.iter().enumerate() {
            writeln!(f, "{:2}: {placement}", index + 1)?;
        }
        Ok(())
    }
}

/// Search statistics for one solver
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SolverStats {
    /// Hands expanded (cache misses that ran the meld loop)
    pub nodes: usize,
    /// Memo table hits and misses
    pub cache: CacheStats,
    /// Outcomes stored in the memo table
    pub states: usize,
}

/// Memoized partition search over a meld library
///
/// The memo table belongs to the solver, so outcomes never leak between
/// solvers. Build one solver per target hand family.
pub struct PartitionSolver<'a> {
    library: &'a MeldLibrary,
    cache: SolveCache,
    nodes: usize,
}

impl<'a> PartitionSolver<'a> {
    /// Create a solver with an empty memo table
    pub fn new(library: &'a MeldLibrary) -> Self {
        Self {
            library,
            cache: SolveCache::new(),
            nodes: 0,
        }
    }

    /// Find a partition of `hand` into melds, or `None` if none exists
    pub fn decompose(&mut self, hand: &Hand) -> Option<Solution> {
        let outcome = self.search(hand);
        debug!(
            "decompose {} tiles ({} jokers): {} after {} nodes, cache {}/{} hit/miss",
            hand.len(),
            hand.jokers(),
            outcome
                .as_ref()
                .map_or_else(|| "no partition".to_string(), |s| format!("{} melds", s.len())),
            self.nodes,
            self.cache.stats.hits,
            self.cache.stats.misses,
        );
        outcome
    }

    /// Statistics accumulated since the solver was created
    pub fn stats(&self) -> SolverStats {
        SolverStats {
            nodes: self.nodes,
            cache: self.cache.stats,
            states: self.cache.len(),
        }
    }

    fn search(&mut self, hand: &Hand) -> Option<Solution> {
        if hand.is_empty() {
            return Some(Solution::default());
        }

        let key = hand.key();
        if let Some(outcome) = self.cache.lookup(&key) {
            return outcome;
        }

        self.nodes += 1;
        let outcome = self.expand(hand);
        self.cache.store(key, outcome.clone());
        outcome
    }

    fn expand(&mut self, hand: &Hand) -> Option<Solution> {
        let library = self.library;
        let pivot = hand.first_tile();
        trace!(
            "expand {} tiles, pivot {}",
            hand.len(),
            pivot.map_or_else(|| "none".to_string(), |tile| tile.to_string())
        );

        let present = hand.mask();
        for meld in library.candidates(pivot) {
            // Reject short melds before cloning the hand
            if joker_shortfall(&present, meld) > hand.jokers() {
                continue;
            }
            let Some(Subtraction { residual, jokers }) = apply(hand, meld) else {
                continue;
            };
            if let Some(rest) = self.search(&residual) {
                return Some(rest.prepend(Placement::new(meld.clone(), jokers)));
            }
        }
        None
    }
}

/// Decompose `hand` with the shared library and a fresh memo table
pub fn decompose(hand: &Hand) -> Option<Solution> {
    PartitionSolver::new(MeldLibrary::global()).decompose(hand)
}

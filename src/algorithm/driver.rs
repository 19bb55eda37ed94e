//! Greedy reserve placement
//!
//! Each round lists small reserve batches and commits the first one whose
//! union with the board still decomposes completely. Rounds repeat until no
//! batch fits. Commitments are never undone, so an early choice can rule out
//! a larger final board.

use crate::algorithm::batches::{Batch, candidate_batches};
use crate::algorithm::library::MeldLibrary;
use crate::algorithm::solver::{PartitionSolver, Solution};
use crate::io::configuration::DEFAULT_MAX_BATCH_SIZE;
use crate::io::error::{Result, invalid_parameter};
use crate::tiles::hand::Hand;
use crate::tiles::tile::{Token, format_tokens};
use log::{debug, info};
use std::fmt;

/// Placement driver parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DriverConfig {
    /// Largest batch tried per round
    pub max_batch_size: usize,
    /// Whether reserve jokers may be proposed in batches
    pub include_reserve_jokers: bool,
    /// Whether to try placing the whole reserve before the first round
    pub attempt_full_clear: bool,
    /// Stop after this many rounds, if set
    pub max_rounds: Option<usize>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            max_batch_size: DEFAULT_MAX_BATCH_SIZE,
            include_reserve_jokers: false,
            attempt_full_clear: true,
            max_rounds: None,
        }
    }
}

impl DriverConfig {
    /// Check parameter ranges
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the batch size or round limit is zero
    pub fn validate(&self) -> Result<()> {
        if self.max_batch_size == 0 {
            return Err(invalid_parameter(
                "max_batch_size",
                &self.max_batch_size,
                &"batches need at least one tile",
            ));
        }
        if self.max_rounds == Some(0) {
            return Err(invalid_parameter(
                "max_rounds",
                &0,
                &"a round limit must allow at least one round",
            ));
        }
        Ok(())
    }
}

/// Hooks called as the driver works through its rounds
///
/// All methods default to doing nothing.
pub trait RoundObserver {
    /// A round begins with `candidates` batches to try
    fn on_round_start(&mut self, _round: usize, _candidates: usize) {}

    /// A batch is about to be tested
    fn on_candidate(&mut self, _batch: &[Token]) {}

    /// A batch was committed to the board
    fn on_commit(&mut self, _commit: &Commit) {}

    /// The driver stopped
    fn on_finish(&mut self, _outcome: &PlacementOutcome) {}
}

/// Observer that ignores every event
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl RoundObserver for NoopObserver {}

/// A batch moved from the reserve to the board
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Commit {
    /// Round that committed the batch (0 for a full clear)
    pub round: usize,
    /// Tiles moved
    pub batch: Batch,
    /// Partition of the board after the move
    pub solution: Solution,
}

/// Why the driver stopped
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    /// The whole reserve was placed at once
    FullClear,
    /// No reserve tiles are left to propose
    ReserveExhausted,
    /// A full round found no batch that fits
    NoViableBatch,
    /// The configured round limit was reached
    RoundLimit,
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::FullClear => "entire reserve placed",
            Self::ReserveExhausted => "reserve exhausted",
            Self::NoViableBatch => "no batch fits",
            Self::RoundLimit => "round limit reached",
        };
        write!(f, "{text}")
    }
}

/// Final state of a placement run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacementOutcome {
    /// Board after all commits
    pub board: Vec<Token>,
    /// Reserve tiles that were never placed
    pub reserve: Vec<Token>,
    /// Commits in the order they happened
    pub commits: Vec<Commit>,
    /// Partition of the final board, if it has one
    pub solution: Option<Solution>,
    /// Why the run ended
    pub termination: Termination,
}

impl PlacementOutcome {
    /// Number of reserve tiles moved onto the board
    pub fn placed(&self) -> usize {
        self.commits.iter().map(|commit| commit.batch.len()).sum()
    }
}

/// Greedy driver moving reserve batches onto a board
///
/// The board only grows and the reserve only shrinks. Every candidate is
/// checked by a fresh solver so memo tables never carry over between targets.
pub struct PlacementDriver<'a> {
    library: &'a MeldLibrary,
    config: DriverConfig,
    board: Vec<Token>,
    reserve: Vec<Token>,
    commits: Vec<Commit>,
    round: usize,
}

impl<'a> PlacementDriver<'a> {
    /// Create a driver for the given pools
    ///
    /// # Errors
    ///
    /// Returns an error if `config` fails validation
    pub fn new(
        library: &'a MeldLibrary,
        board: Vec<Token>,
        reserve: Vec<Token>,
        config: DriverConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            library,
            config,
            board,
            reserve,
            commits: Vec::new(),
            round: 0,
        })
    }

    /// Current board
    pub fn board(&self) -> &[Token] {
        &self.board
    }

    /// Current reserve
    pub fn reserve(&self) -> &[Token] {
        &self.reserve
    }

    /// Commits so far
    pub fn commits(&self) -> &[Commit] {
        &self.commits
    }

    /// Rounds started so far
    pub const fn round(&self) -> usize {
        self.round
    }

    /// Check whether the board plus `batch` decomposes
    pub fn try_batch(&self, batch: &[Token]) -> Option<Solution> {
        let hand = Hand::from_tokens(self.board.iter().chain(batch));
        PartitionSolver::new(self.library).decompose(&hand)
    }

    /// Try to place the entire reserve at once, jokers included
    pub fn try_full_clear(&mut self, observer: &mut impl RoundObserver) -> Option<&Commit> {
        if self.reserve.is_empty() {
            return None;
        }
        let whole = self.reserve.clone();
        let solution = self.try_batch(&whole)?;
        self.commit(0, whole, solution, observer)
    }

    /// Run one round, committing the first batch that fits
    ///
    /// Returns `None` when no candidate batch fits.
    pub fn step(&mut self, observer: &mut impl RoundObserver) -> Option<&Commit> {
        self.round += 1;
        let candidates = candidate_batches(
            &self.reserve,
            self.config.max_batch_size,
            self.config.include_reserve_jokers,
        );
        debug!(
            "round {}: {} candidate batches from {} reserve tiles",
            self.round,
            candidates.len(),
            self.reserve.len()
        );
        observer.on_round_start(self.round, candidates.len());

        for batch in candidates {
            observer.on_candidate(&batch);
            if let Some(solution) = self.try_batch(&batch) {
                return self.commit(self.round, batch, solution, observer);
            }
        }
        None
    }

    /// Run rounds until nothing more fits and report the final state
    pub fn run(mut self, observer: &mut impl RoundObserver) -> PlacementOutcome {
        let termination = self.drive(observer);
        info!(
            "placement finished after {} rounds: {} commits, {} tiles left in reserve ({termination})",
            self.round,
            self.commits.len(),
            self.reserve.len()
        );
        let outcome = self.into_outcome(termination);
        observer.on_finish(&outcome);
        outcome
    }

    fn drive(&mut self, observer: &mut impl RoundObserver) -> Termination {
        if self.config.attempt_full_clear && self.try_full_clear(observer).is_some() {
            return Termination::FullClear;
        }

        loop {
            let proposable = self
                .reserve
                .iter()
                .any(|token| self.config.include_reserve_jokers || !token.is_joker());
            if !proposable {
                return Termination::ReserveExhausted;
            }
            if self.config.max_rounds.is_some_and(|limit| self.round >= limit) {
                return Termination::RoundLimit;
            }
            if self.step(observer).is_none() {
                return Termination::NoViableBatch;
            }
        }
    }

    fn commit(
        &mut self,
        round: usize,
        batch: Batch,
        solution: Solution,
        observer: &mut impl RoundObserver,
    ) -> Option<&Commit> {
        for token in &batch {
            if let Some(position) = self.reserve.iter().position(|held| held == token) {
                self.reserve.remove(position);
            }
        }
        self.board.extend(batch.iter().copied());
        info!(
            "round {round}: committed [{}], board {} tiles, reserve {} tiles",
            format_tokens(&batch),
            self.board.len(),
            self.reserve.len()
        );

        let commit = Commit {
            round,
            batch,
            solution,
        };
        observer.on_commit(&commit);
        self.commits.push(commit);
        self.commits.last()
    }

    fn into_outcome(self, termination: Termination) -> PlacementOutcome {
        let solution = match self.commits.last() {
            Some(commit) => Some(commit.solution.clone()),
            None => PartitionSolver::new(self.library).decompose(&Hand::from_tokens(&self.board)),
        };
        PlacementOutcome {
            board: self.board,
            reserve: self.reserve,
            commits: self.commits,
            solution,
            termination,
        }
    }
}

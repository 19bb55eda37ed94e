//! Exact meld decomposition for rummy-style tile games
//!
//! Decides whether a multiset of colored tiles and jokers splits completely
//! into runs and groups, returning one partition when it does. A greedy
//! driver builds on the decision procedure to move small batches of reserve
//! tiles onto a board for as long as the board stays fully decomposable.

#![forbid(unsafe_code)]

/// Meld library, partition search and the greedy placement driver
pub mod algorithm;
/// Input parsing, rendering, progress, configuration and error handling
pub mod io;
/// Tile value types, hands and dealing
pub mod tiles;

pub use algorithm::solver::{Solution, decompose};
pub use io::error::{Result, SolverError};
pub use tiles::hand::Hand;
pub use tiles::tile::{Color, Tile, Token};

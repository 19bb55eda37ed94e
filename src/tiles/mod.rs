//! Tile data model
//!
//! This module contains:
//! - Tile, color and token value types with parsing
//! - The hand multiset used throughout the search
//! - A seeded dealer for random puzzles

/// Seeded puzzle dealing
pub mod deal;
/// Multiset of tiles
pub mod hand;
/// Tile value types and parsing
pub mod tile;

pub use hand::Hand;
pub use tile::{Color, Tile, Token};

/// Candidate reserve batches for placement rounds
pub mod batches;
/// Bitset over colored tile identities
pub mod bitset;
/// Canonical hand keys and the per-search memo table
pub mod cache;
/// Greedy reserve placement driver
pub mod driver;
/// Library of every legal run and group
pub mod library;
/// Memoized exact partition search
pub mod solver;
/// Meld removal with joker substitution
pub mod subtraction;

//! Everything between the solver and the outside world

/// Command-line interface and application runner
pub mod cli;
/// Domain constants and runtime defaults
pub mod configuration;
/// Error types
pub mod error;
/// Puzzle parsing and loading
pub mod input;
/// Terminal progress bars
pub mod progress;
/// Solution rendering
pub mod render;

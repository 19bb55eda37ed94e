//! Command-line interface for solving and extending tile boards

use crate::algorithm::driver::{
    DriverConfig, NoopObserver, PlacementDriver, PlacementOutcome, Termination,
};
use crate::algorithm::library::MeldLibrary;
use crate::io::configuration::{
    DEFAULT_DEAL_MELDS, DEFAULT_DEAL_RESERVE, DEFAULT_LOG_LEVEL, DEFAULT_MAX_BATCH_SIZE,
    DEFAULT_SEED,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::input::Puzzle;
use crate::io::progress::ProgressManager;
use crate::io::render::{Glyphs, render_solution};
use crate::tiles::deal::Dealer;
use crate::tiles::tile::format_tokens;
use clap::{ArgAction, Parser};
use flexi_logger::{Logger, LoggerHandle};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rummisolve")]
#[command(
    author,
    version,
    about = "Partition tiles into melds and grow a board from a reserve"
)]
/// Command-line arguments for the solver
// Feature toggles are independent switches
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Puzzle file with `board:` and `reserve:` lines
    #[arg(value_name = "PUZZLE", conflicts_with_all = ["board", "reserve", "deal"])]
    pub puzzle: Option<PathBuf>,

    /// Board tiles, e.g. "R1 R2 R3 J"
    #[arg(short, long)]
    pub board: Option<String>,

    /// Reserve tiles, e.g. "K4 O4 B4"
    #[arg(short, long)]
    pub reserve: Option<String>,

    /// Deal a random puzzle instead of reading one
    #[arg(short, long, conflicts_with_all = ["board", "reserve"])]
    pub deal: bool,

    /// Seed for dealt puzzles
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Melds on a dealt board
    #[arg(long, default_value_t = DEFAULT_DEAL_MELDS)]
    pub deal_melds: usize,

    /// Tiles in a dealt reserve
    #[arg(long, default_value_t = DEFAULT_DEAL_RESERVE)]
    pub deal_reserve: usize,

    /// Largest reserve batch tried per round
    #[arg(short, long, default_value_t = DEFAULT_MAX_BATCH_SIZE)]
    pub max_batch: usize,

    /// Allow reserve jokers in batches
    #[arg(short = 'j', long)]
    pub reserve_jokers: bool,

    /// Skip the attempt to place the whole reserve at once
    #[arg(long)]
    pub no_full_clear: bool,

    /// Stop after this many rounds
    #[arg(long)]
    pub max_rounds: Option<usize>,

    /// Draw tiles as colored emoji
    #[arg(short, long)]
    pub icons: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Log level implied by the verbosity flags
    pub const fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => DEFAULT_LOG_LEVEL,
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Glyph style for rendered tiles
    pub const fn glyphs(&self) -> Glyphs {
        if self.icons { Glyphs::Icons } else { Glyphs::Text }
    }

    /// Driver parameters from the flags
    pub const fn driver_config(&self) -> DriverConfig {
        DriverConfig {
            max_batch_size: self.max_batch,
            include_reserve_jokers: self.reserve_jokers,
            attempt_full_clear: !self.no_full_clear,
            max_rounds: self.max_rounds,
        }
    }

    /// Read, parse or deal the puzzle selected by the flags
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No puzzle source was given
    /// - The puzzle file cannot be read or parsed
    /// - A token in `--board` or `--reserve` is invalid
    pub fn load_puzzle(&self) -> Result<Puzzle> {
        if self.deal {
            let mut dealer = Dealer::new(self.seed);
            return Ok(dealer.deal(MeldLibrary::global(), self.deal_melds, self.deal_reserve));
        }
        if let Some(path) = &self.puzzle {
            return Puzzle::from_file(path);
        }
        if self.board.is_some() || self.reserve.is_some() {
            return Puzzle::from_strs(
                self.board.as_deref().unwrap_or_default(),
                self.reserve.as_deref().unwrap_or_default(),
            );
        }
        Err(invalid_parameter(
            "puzzle",
            &"",
            &"give a puzzle file, --board/--reserve, or --deal",
        ))
    }
}

/// Install the stderr logger
///
/// `RUST_LOG` takes precedence over `level`. Keep the returned handle alive
/// for as long as logging is needed.
///
/// # Errors
///
/// Returns an error if the level specification is invalid or a logger is
/// already installed
pub fn init_logging(level: &str) -> Result<LoggerHandle> {
    Ok(Logger::try_with_env_or_str(level)?
        .format(flexi_logger::colored_default_format)
        .start()?)
}

/// Runs the placement driver for one puzzle and reports the result
pub struct SolverApp {
    cli: Cli,
}

impl SolverApp {
    /// Create an application for the parsed arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Load the puzzle, run the driver and print the report
    ///
    /// # Errors
    ///
    /// Returns an error if the puzzle cannot be loaded or the driver
    /// configuration is invalid
    // Printing the report is the purpose of the binary
    #[allow(clippy::print_stdout)]
    pub fn run(&self) -> Result<()> {
        let puzzle = self.cli.load_puzzle()?;
        let outcome = self.solve(&puzzle)?;
        for line in format_report(&puzzle, &outcome, self.cli.glyphs()) {
            println!("{line}");
        }
        Ok(())
    }

    /// Run the driver on `puzzle`
    ///
    /// # Errors
    ///
    /// Returns an error if the driver configuration is invalid
    pub fn solve(&self, puzzle: &Puzzle) -> Result<PlacementOutcome> {
        let driver = PlacementDriver::new(
            MeldLibrary::global(),
            puzzle.board.clone(),
            puzzle.reserve.clone(),
            self.cli.driver_config(),
        )?;

        let outcome = if self.cli.should_show_progress() {
            let mut progress = ProgressManager::new(puzzle.reserve.len());
            driver.run(&mut progress)
        } else {
            driver.run(&mut NoopObserver)
        };
        Ok(outcome)
    }
}

/// Human-readable report of a placement run
pub fn format_report(puzzle: &Puzzle, outcome: &PlacementOutcome, glyphs: Glyphs) -> Vec<String> {
    let mut lines = vec![format!(
        "Board {} -> {} tiles, reserve {} -> {} tiles ({})",
        puzzle.board.len(),
        outcome.board.len(),
        puzzle.reserve.len(),
        outcome.reserve.len(),
        outcome.termination
    )];

    for (index, commit) in outcome.commits.iter().enumerate() {
        lines.push(format!(
            "  commit {} (round {}): {}",
            index + 1,
            commit.round,
            format_tokens(&commit.batch)
        ));
    }

    match &outcome.solution {
        Some(solution) => {
            lines.extend(render_solution(solution, &puzzle.board, glyphs));
        }
        None => lines.push("Board has no complete partition".to_string()),
    }

    if outcome.termination == Termination::FullClear {
        lines.push("All clear".to_string());
    } else if !outcome.reserve.is_empty() {
        lines.push(format!("Left in reserve: {}", format_tokens(&outcome.reserve)));
    }

    lines
}

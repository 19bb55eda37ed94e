//! CLI entry point for the meld solver

use clap::Parser;
use rummisolve::io::cli::{Cli, SolverApp, init_logging};

fn main() -> rummisolve::Result<()> {
    let cli = Cli::parse();
    let _logger = init_logging(cli.log_level())?;
    SolverApp::new(cli).run()
}
